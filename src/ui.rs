pub(crate) mod card;
pub(crate) mod cta;
pub(crate) mod layout;
pub(crate) mod palette;
pub(crate) mod slider;
