use once_cell::sync::Lazy;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

// ===== Уровни логгирования =====

// Меньшее число — более высокий приоритет. Сообщение выводится,
// только если его уровень <= текущего порога. None годится лишь
// как порог: глушит всё, включая Fatal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(i32)]
pub enum LogLevel {
    None = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> i32 {
        level as i32
    }
}

// ===== Направление вывода =====

enum Destination {
    Stdout,
    File(File),
}

impl Destination {
    fn open(path: &Path) -> Destination {
        // Ошибка открытия не эскалируется: молча откатываемся на stdout,
        // логгер никогда не остаётся без рабочего направления
        match File::create(path) {
            Ok(file) => Destination::File(file),
            Err(_) => Destination::Stdout,
        }
    }

    fn write(&mut self, message: &str) -> io::Result<()> {
        match self {
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(message.as_bytes())?;
                handle.flush()
            }
            Destination::File(file) => {
                file.write_all(message.as_bytes())?;
                file.flush()
            }
        }
    }
}

// ===== Логгер =====

struct Logger {
    destination: Destination,
    threshold: i32,
}

impl Logger {
    fn new() -> Self {
        Logger {
            destination: Destination::Stdout,
            threshold: LogLevel::Warn as i32,
        }
    }

    fn set_destination(&mut self, path: Option<&Path>) {
        // Прежний файл (если был) закрывается при замене направления
        self.destination = match path {
            Some(path) => Destination::open(path),
            None => Destination::Stdout,
        };
    }

    fn log(&mut self, level: i32, args: fmt::Arguments) -> i64 {
        if level > self.threshold {
            return -1;
        }
        // Перевод строки не добавляется: формат сам владеет терминатором
        let message = format!("{}", args);
        match self.destination.write(&message) {
            Ok(()) => message.len() as i64,
            Err(_) => -1,
        }
    }
}

// ===== Глобальный логгер =====

static GLOBAL_LOGGER: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger::new()));

fn instance() -> MutexGuard<'static, Logger> {
    // Отравленный мьютекс не должен ронять вызывающий код
    GLOBAL_LOGGER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_level<L: Into<i32>>(level: L) {
    // Порог не валидируется: значение вне именованных уровней —
    // легальный способ заглушить или пропустить всё
    instance().threshold = level.into();
}

pub fn get_level() -> i32 {
    instance().threshold
}

pub fn set_destination(path: Option<&Path>) {
    instance().set_destination(path);
}

pub fn shutdown() {
    // Явное закрытие файла до завершения процесса,
    // вместо неопределённого порядка разрушения статиков
    instance().set_destination(None);
}

pub fn log<L: Into<i32>>(level: L, args: fmt::Arguments) -> i64 {
    instance().log(level.into(), args)
}

pub fn fatal(args: fmt::Arguments) -> i64 {
    log(LogLevel::Fatal, args)
}

pub fn error(args: fmt::Arguments) -> i64 {
    log(LogLevel::Error, args)
}

pub fn warn(args: fmt::Arguments) -> i64 {
    log(LogLevel::Warn, args)
}

pub fn info(args: fmt::Arguments) -> i64 {
    log(LogLevel::Info, args)
}

pub fn debug(args: fmt::Arguments) -> i64 {
    log(LogLevel::Debug, args)
}

// ===== Макросы =====

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {{
        $crate::log($level, ::std::format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {{
        $crate::fatal(::std::format_args!($($arg)*))
    }};
}
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::error(::std::format_args!($($arg)*))
    }};
}
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::warn(::std::format_args!($($arg)*))
    }};
}
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        $crate::info(::std::format_args!($($arg)*))
    }};
}
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        $crate::debug(::std::format_args!($($arg)*))
    }};
}
