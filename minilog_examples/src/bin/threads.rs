// example_threads — конкурентные вызовы из нескольких потоков;
// внутренний мьютекс не даёт строкам перемешиваться

use minilog::LogLevel;
use std::thread;

const WORKERS: u32 = 4;
const STEPS: u32 = 3;

fn main() {
    minilog::set_level(LogLevel::Info);

    let handles: Vec<_> = (0..WORKERS)
        .map(|id| {
            thread::spawn(move || {
                for step in 0..STEPS {
                    minilog::info!("worker {} step {}\n", id, step);
                }
                if id % 2 == 0 {
                    minilog::warn!("worker {} finished with warnings\n", id);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }

    minilog::info!("all workers completed\n");
}
