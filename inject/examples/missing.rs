use fibre_inject::{resolve, Injector, Invoker, TypeMapper};
use std::panic;
use std::rc::Rc;

struct UnregisteredService;

fn main() {
  let injector = Injector::new();

  // --- Using the non-panicking `get()` method ---
  match injector.get::<UnregisteredService>() {
    Some(_) => panic!("Should not have found the service!"),
    None => println!("Correctly received `None` for the missing service."),
  }

  // --- `invoke` reports the missing type and never calls the function ---
  let result = injector.invoke(|_service: Rc<UnregisteredService>| {
    unreachable!("dependencies were not satisfied");
  });
  match result {
    Ok(()) => panic!("invoke should have failed"),
    Err(err) => println!("invoke failed as expected: {}", err),
  }

  // --- Using the panicking `resolve!` macro ---
  let result = panic::catch_unwind(|| {
    let injector = Injector::new();
    let _service = resolve!(injector, UnregisteredService);
  });
  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");
}
