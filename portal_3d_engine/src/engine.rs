/// Portal3D Engine - Singleton manager for the loaded level and the logger
///
/// The level graph is the only process-wide state of the engine: it is
/// loaded once, validated, then handed out read-only as `Arc<Level>` to any
/// number of cullers. Access goes through thread-safe static storage with
/// RwLock.

use std::sync::{OnceLock, RwLock, Arc};
use std::time::SystemTime;
use crate::level::Level;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Currently loaded level (read-only once registered)
    level: RwLock<Option<Arc<Level>>>,
}

impl EngineState {
    /// Create a new empty engine state
    fn new() -> Self {
        Self {
            level: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use portal_3d_engine::portal3d::Engine;
/// use portal_3d_engine::portal3d::level::Level;
///
/// Engine::initialize()?;
///
/// let level = Level::new();
/// // ... add vertices, sectors and walls ...
/// Engine::load_level(level)?;
///
/// let level = Engine::level()?;
/// println!("{} sectors", level.sector_count());
///
/// Engine::shutdown();
/// # Ok::<(), portal_3d_engine::portal3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("portal3d::Engine", "Initialization failed: {}", msg);
            }
            Error::LockPoisoned(msg) => {
                crate::engine_error!("portal3d::Engine", "Lock poisoned: {}", msg);
            }
            _ => {
                crate::engine_error!("portal3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    /// Initialize the engine
    ///
    /// Must be called once at application startup before loading a level.
    /// Calling it again is harmless.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the engine and drop the loaded level
    ///
    /// Outstanding `Arc<Level>` handles stay valid until dropped.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut level) = state.level.write() {
                *level = None;
            }
        }
        crate::engine_info!("portal3d::Engine", "Engine shut down");
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    // ===== LEVEL API =====

    /// Validate a level and register it as the current level
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A level is already loaded
    /// - The level fails `Level::validate()`
    /// - The level lock is poisoned
    pub fn load_level(level: Level) -> Result<()> {
        let state = Self::state()?;

        level.validate()?;

        let mut lock = state.level.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("Level lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Level already loaded. Call Engine::unload_level() first.".to_string())
            ));
        }

        crate::engine_info!("portal3d::Engine",
            "Level loaded: {} sectors, {} walls, {} vertices",
            level.sector_count(), level.wall_count(), level.vertices().len());

        *lock = Some(Arc::new(level));
        Ok(())
    }

    /// Get the current level
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or no level is loaded.
    pub fn level() -> Result<Arc<Level>> {
        let state = Self::state()?;

        let lock = state.level.read()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("Level lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("No level loaded. Call Engine::load_level() first.".to_string())
            ))
    }

    /// True when a level is loaded
    pub fn has_level() -> bool {
        ENGINE_STATE.get()
            .and_then(|state| state.level.read().ok().map(|lock| lock.is_some()))
            .unwrap_or(false)
    }

    /// Drop the current level, allowing another one to be loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn unload_level() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.level.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("Level lock poisoned".to_string())
            ))?;

        if lock.take().is_some() {
            crate::engine_info!("portal3d::Engine", "Level unloaded");
        }

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut level) = state.level.write() {
                *level = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (file logger,
    /// bridge to the `log` crate, etc.)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use portal_3d_engine::portal3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
