use anyhow::Context;
use roster_common::{config::Config, record::Record, success, warn};
use roster_core::session::profile::{self, ProfileRequest};

use crate::commands::demo::print_records;
use crate::terminal::{print, sink::TerminalSink};

pub fn profile(request: ProfileRequest, cfg: &Config) -> anyhow::Result<()> {
    if let Some(age) = request.age.filter(|age| *age < 0) {
        warn!("Refusing to build a record aged {}", age);
    }

    let mut sink: TerminalSink = TerminalSink::new(cfg);
    let record: Record =
        profile::build_profile(request, &mut sink).context("could not build the profile")?;

    print::header("record", cfg.quiet);
    print_records(std::slice::from_ref(&record), cfg);
    success!("Profile for {} is ready", record.name());
    Ok(())
}
