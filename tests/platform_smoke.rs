//! Reads real counters from the host running the tests.

use memwatch::monitor::Monitor;
use memwatch::system::collector::Collector;
use memwatch::system::counters::CountersProvider;

#[test]
fn host_memory_totals_are_sane() {
    let mut collector = Collector::new();
    let mem = collector.memory_totals().expect("memory counters");
    assert!(mem.total > 0);
    assert!(mem.used <= mem.total);
    assert!(mem.cached <= mem.total);

    let swap = collector.swap_totals().expect("swap counters");
    assert!(swap.used <= swap.total);
}

#[test]
fn own_process_is_enumerated_and_readable() {
    let mut collector = Collector::new();
    let pid = std::process::id();

    let pids = collector.process_ids();
    assert!(pids.contains(&pid), "current pid {pid} not enumerated");
    assert!(pids.windows(2).all(|w| w[0] < w[1]));

    let command = collector.process_command(pid).expect("own command");
    assert!(!command.is_empty());

    let mem = collector.process_memory(pid).expect("own memory");
    assert!(mem.resident > 0);
}

#[test]
fn live_monitor_ticks() {
    let mut monitor = Monitor::new(Collector::new(), 10, 5);
    let sample = monitor.refresh_chart().expect("chart tick");
    assert!(sample.mem_percent <= 100);

    let top = monitor.refresh_processes();
    assert_eq!(top.len(), 5);
    assert!(!top[0].is_blank(), "at least the test runner uses memory");
}
