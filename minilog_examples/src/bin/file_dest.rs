// example_file_dest — вывод в файл, откат на stdout при ошибке открытия,
// явное закрытие файла через shutdown

use minilog::LogLevel;
use std::path::Path;

fn main() {
    minilog::set_level(LogLevel::Info);

    // 1. Направляем вывод в файл (существующее содержимое усекается)
    minilog::set_destination(Some(Path::new("example_file_dest.log")));
    minilog::info!("this line goes to the file\n");
    minilog::warn!("so does this one\n");

    // 2. Недоступный путь: открытие не удаётся, вывод молча
    //    возвращается на stdout — ошибка не поднимается
    minilog::set_destination(Some(Path::new("/no/such/dir/minilog.log")));
    minilog::info!("open failed, back on stdout\n");

    // 3. None — явный возврат на stdout
    minilog::set_destination(Some(Path::new("example_file_dest.log")));
    minilog::info!("in the file again (truncated)\n");
    minilog::set_destination(None);
    minilog::info!("and on stdout again\n");

    // 4. Финальная часть: закрываем файл до завершения процесса
    minilog::shutdown();
}
