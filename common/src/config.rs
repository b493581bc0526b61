#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Quiet level. `1` drops headers and the banner, `2` also drops record details.
    pub quiet: u8,
    /// Skips the banner printed at startup.
    pub no_banner: bool,
}
