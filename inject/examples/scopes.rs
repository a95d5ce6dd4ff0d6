use fibre_inject::{Injector, Invoker, TypeMapper};
use std::rc::Rc;

struct Database {
  url: String,
}

struct RequestId(u64);

fn handle(db: Rc<Database>, id: Rc<RequestId>) -> String {
  format!("request {} served from {}", id.0, db.url)
}

fn main() {
  // Application-wide bindings live in the root.
  let root = Rc::new(Injector::new());
  root.map(Database {
    url: "postgres://localhost/app".to_string(),
  });

  // Each request gets a child scope with its own bindings.
  for id in 1..=3 {
    let request = Injector::child_of(&root);
    request.map(RequestId(id));
    println!("{}", request.invoke(handle).expect("request scope is wired"));
  }

  // Nothing from the request scopes leaked into the root.
  assert!(root.get::<RequestId>().is_none());
  println!("Root still holds {} binding(s).", root.len());
}
