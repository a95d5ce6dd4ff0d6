use fibre_inject::{Applicator, Apply, Injector, TypeMapper};
use std::rc::Rc;

trait Mailer {
  fn send(&self, to: &str, body: &str);
}

struct StdoutMailer;
impl Mailer for StdoutMailer {
  fn send(&self, to: &str, body: &str) {
    println!("to {}: {}", to, body);
  }
}

struct NullMailer;
impl Mailer for NullMailer {
  fn send(&self, _to: &str, _body: &str) {}
}

#[derive(Apply)]
struct SignupHandler {
  #[inject]
  mailer: Rc<dyn Mailer>,
  #[inject]
  sender: Rc<String>,
  sent: usize,
}

impl SignupHandler {
  fn new() -> Self {
    Self {
      mailer: Rc::new(NullMailer),
      sender: Rc::default(),
      sent: 0,
    }
  }

  fn welcome(&mut self, user: &str) {
    self.mailer.send(user, &format!("Welcome aboard, from {}", self.sender));
    self.sent += 1;
  }
}

fn main() {
  let injector = Injector::new();
  injector.map_to::<dyn Mailer>(Rc::new(StdoutMailer));
  injector.map(String::from("team@example.org"));

  let mut handler = SignupHandler::new();
  injector
    .apply(&mut handler)
    .expect("handler dependencies are registered");

  handler.welcome("ada@example.org");
  println!("sent {} message(s)", handler.sent);
}
