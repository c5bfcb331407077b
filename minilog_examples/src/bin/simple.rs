// example_simple — базовый сценарий: порог по умолчанию, уровни,
// возвращаемое значение

use minilog::LogLevel;

fn main() {
    // 1. Порог по умолчанию — Warn: debug и info подавляются
    let suppressed = minilog::debug!("this debug message is suppressed\n");
    assert_eq!(suppressed, -1);

    minilog::warn!("the default threshold admits warnings\n");
    minilog::error!("and anything more severe\n");

    // 2. Понижаем порог — debug становится видимым
    minilog::set_level(LogLevel::Debug);
    let written = minilog::debug!("debug is visible now, iteration {}\n", 1);
    minilog::info!("log returned {} bytes written\n", written);

    // 3. Значение вне именованных уровней глушит всё
    minilog::set_level(LogLevel::None);
    let silenced = minilog::fatal!("never shown\n");
    minilog::set_level(LogLevel::Info);
    minilog::info!("even fatal was silenced, return value {}\n", silenced);
}
