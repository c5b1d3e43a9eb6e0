use std::fmt::Arguments;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Logger;

impl Logger {
    /// DEBUG lines are dropped unless verbose output is switched on.
    pub fn set_verbose(verbose: bool) {
        VERBOSE.store(verbose, Ordering::Relaxed);
    }

    pub fn is_verbose() -> bool {
        VERBOSE.load(Ordering::Relaxed)
    }

    pub fn info(args: Arguments) {
        println!("{}", Logger::line("INFO ", args));
    }

    pub fn debug(args: Arguments) {
        if Logger::is_verbose() {
            println!("{}", Logger::line("DEBUG", args));
        }
    }

    pub fn warn(args: Arguments) {
        eprintln!("{}", Logger::line("WARN ", args));
    }

    pub fn error(args: Arguments) {
        eprintln!("{}", Logger::line("ERROR", args));
    }

    fn line(level: &str, args: Arguments) -> String {
        let local = Local::now().format("%d/%m/%Y %H:%M:%S");
        format!("[{level}] [{local}] {args}")
    }
}

#[macro_export]
macro_rules! logger {
    (INFO, $($arg:tt)*) => {
        $crate::utils::logger::Logger::info(format_args!($($arg)*))
    };
    (DEBUG, $($arg:tt)*) => {
        $crate::utils::logger::Logger::debug(format_args!($($arg)*))
    };
    (WARN, $($arg:tt)*) => {
        $crate::utils::logger::Logger::warn(format_args!($($arg)*))
    };
    (ERROR, $($arg:tt)*) => {
        $crate::utils::logger::Logger::error(format_args!($($arg)*))
    };
}
