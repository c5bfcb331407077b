// Отдельный тестовый бинарь: конфигурация по умолчанию проверяется
// до того, как хоть кто-то успел её изменить

use minilog::LogLevel;

#[test]
fn default_threshold_is_warn_and_destination_is_stdout() {
    // Первый же доступ создаёт логгер с порогом Warn
    assert_eq!(minilog::get_level(), LogLevel::Warn as i32);

    // debug подавляется порогом по умолчанию
    assert_eq!(minilog::debug!("must not appear\n"), -1);
    assert_eq!(minilog::info!("must not appear either\n"), -1);

    // warn и более важные уровни проходят на stdout
    assert_eq!(minilog::warn!("warn1\n"), 6);
    assert!(minilog::error!("error after warn\n") >= 0);
    assert!(minilog::fatal!("fatal after warn\n") >= 0);
}
