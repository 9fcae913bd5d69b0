use anyhow::{anyhow, bail, Result};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// External typesetting engine. The core only ever hands it the full queue
/// of markup strings; everything else about the engine stays outside.
pub trait TypesetEngine: Send {
    fn typeset(&mut self, queue: &[String]);
}

static ENGINE: Lazy<Mutex<Option<Box<dyn TypesetEngine>>>> = Lazy::new(|| Mutex::new(None));

/// Install the process-wide engine handle. Acquired once at startup; a
/// second acquisition without an intervening release is an error.
pub fn acquire(engine: Box<dyn TypesetEngine>) -> Result<()> {
    let mut slot = ENGINE
        .lock()
        .map_err(|_| anyhow!("typeset engine lock poisoned"))?;
    if slot.is_some() {
        bail!("typeset engine already acquired");
    }
    *slot = Some(engine);
    Ok(())
}

/// Release the engine handle. Subsequent typeset passes become silent
/// no-ops until a new engine is acquired.
pub fn release() {
    if let Ok(mut slot) = ENGINE.lock() {
        *slot = None;
    }
}

pub fn is_acquired() -> bool {
    ENGINE.lock().map(|slot| slot.is_some()).unwrap_or(false)
}

/// Run `f` against the acquired engine. Returns whether an engine ran.
pub(crate) fn with_engine(f: impl FnOnce(&mut dyn TypesetEngine)) -> bool {
    match ENGINE.lock() {
        Ok(mut slot) => match slot.as_mut() {
            Some(engine) => {
                f(engine.as_mut());
                true
            }
            None => {
                tracing::debug!("typeset pass skipped: no engine acquired");
                false
            }
        },
        Err(_) => false,
    }
}
