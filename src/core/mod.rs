pub mod commit;
pub mod day;
pub mod duration;
pub mod entry;
pub mod reconcile;
pub mod timer;
