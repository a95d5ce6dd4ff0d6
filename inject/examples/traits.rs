use fibre_inject::{Injector, Invoker, TypeMapper};
use std::rc::Rc;

// 1. Define the abstraction (the trait)
trait Logger {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. A function that depends only on the abstraction
fn generate_report(logger: Rc<dyn Logger>, title: Rc<String>) -> usize {
  logger.log(&format!("Starting report '{}'.", title));
  // ... logic to generate report ...
  logger.log("Finished report generation.");
  title.len()
}

fn main() {
  let injector = Injector::new();

  // Bind the concrete ConsoleLogger under `dyn Logger`.
  injector.map_to::<dyn Logger>(Rc::new(ConsoleLogger));
  injector.map(String::from("quarterly"));

  // The injector resolves both parameters by type before calling.
  let written = injector
    .invoke(generate_report)
    .expect("report dependencies are registered");
  println!("Report title length: {}", written);
}
