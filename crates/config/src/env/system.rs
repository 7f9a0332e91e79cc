use std::env;

use super::{ReadEnv, WriteEnv};

/// Zero-sized type that delegates to the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

impl WriteEnv for SystemEnv {
    unsafe fn set_var(&self, key: &str, value: &str) {
        // SAFETY: the caller guarantees no other thread touches the process
        // environment during this call, and that key and value are valid.
        unsafe {
            env::set_var(key, value);
        }
    }
}
