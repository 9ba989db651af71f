use fibre_singleton::LocalSingleton;
use std::cell::RefCell;
use std::thread;

// Not `Sync`, so it cannot be a process-wide `Singleton`.
#[derive(Default)]
struct Scratch {
  words: RefCell<Vec<&'static str>>,
}

fn record(word: &'static str) -> usize {
  let scratch = LocalSingleton::<Scratch>::get();
  scratch.words.borrow_mut().push(word);
  let len = scratch.words.borrow().len();
  len
}

fn main() {
  record("main-a");
  record("main-b");

  let worker_len = thread::spawn(|| record("worker")).join().unwrap();
  let main_len = LocalSingleton::<Scratch>::get().words.borrow().len();

  println!("main thread recorded {main_len} words, worker recorded {worker_len}");
  assert_eq!(main_len, 2);
  assert_eq!(worker_len, 1);
}
