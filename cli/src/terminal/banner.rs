use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
           ____   ___  ____ _____ _____ ____
          |  _ \ / _ \/ ___|_   _| ____|  _ \
          | |_) | | | \___ \ | | |  _| | |_) |
          |  _ <| |_| |___) || | | |___|  _ <
          |_| \_\\___/|____/ |_| |_____|_| \_\
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
