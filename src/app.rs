pub(crate) mod mockup;
pub(crate) mod snapshot;
