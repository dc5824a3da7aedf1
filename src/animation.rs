pub(crate) mod entrance;
pub(crate) mod oscillator;
