//! Synthetic daily activity: one record per day for the trailing year.

pub(crate) mod generator;
pub(crate) mod record;
