#[cfg(test)]
mod record;
#[cfg(test)]
mod sessions;
#[cfg(test)]
mod utils;
