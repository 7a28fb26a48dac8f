/// Upper bound on concurrent search workers
pub const MAX_WORKERS: usize = 16;
