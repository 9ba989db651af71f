use fibre_singleton::{singleton, Singleton};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Mutex,
};
use std::thread;

// A simple log sink that records lines and gets a unique ID upon creation.
struct LogSink {
  id: usize,
  lines: Mutex<Vec<String>>,
}

// A global, thread-safe counter to show how many sinks get built.
static SINKS_BUILT: AtomicUsize = AtomicUsize::new(0);

impl Default for LogSink {
  fn default() -> Self {
    let id = SINKS_BUILT.fetch_add(1, Ordering::SeqCst);
    println!("Creating LogSink #{id}...");
    LogSink {
      id,
      lines: Mutex::new(Vec::new()),
    }
  }
}

fn main() {
  println!("--- Resolving tag 0 from several threads ---");
  thread::scope(|s| {
    for worker in 0..4 {
      s.spawn(move || {
        let sink = Singleton::<LogSink, 0>::get();
        sink.lines.lock().unwrap().push(format!("worker {worker} checked in"));
      });
    }
  });

  let main_sink = singleton!(LogSink);
  println!(
    "Tag {} sink #{} holds {} lines",
    Singleton::<LogSink, 0>::index(),
    main_sink.id,
    main_sink.lines.lock().unwrap().len()
  );
  assert_eq!(main_sink.lines.lock().unwrap().len(), 4);

  println!("\n--- Resolving tag 1 ---");
  let error_sink = singleton!(LogSink, 1);
  error_sink.lines.lock().unwrap().push("disk full".into());
  println!(
    "Tag {} sink #{} holds {} lines",
    Singleton::<LogSink, 1>::index(),
    error_sink.id,
    error_sink.lines.lock().unwrap().len()
  );

  assert!(!std::ptr::eq(main_sink, error_sink));
  assert_eq!(SINKS_BUILT.load(Ordering::SeqCst), 2);
  println!("\nTwo independent sinks, each built exactly once.");
}
