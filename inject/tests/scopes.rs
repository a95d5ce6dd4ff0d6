mod common;

use fibre_inject::{InjectError, Injector, Invoker, TypeMapper};
use pretty_assertions::assert_eq;
use std::rc::Rc;

trait Store {
  fn name(&self) -> &'static str;
}

struct MemoryStore;
impl Store for MemoryStore {
  fn name(&self) -> &'static str {
    "memory"
  }
}

struct DiskStore;
impl Store for DiskStore {
  fn name(&self) -> &'static str {
    "disk"
  }
}

#[test]
fn test_child_falls_back_to_parent() {
  common::init_tracing();
  let parent = Rc::new(Injector::new());
  parent.map(42_u64);

  let child = Injector::new();
  child.set_parent(&parent).unwrap();

  assert_eq!(child.get::<u64>().as_deref(), Some(&42));
  assert_eq!(child.len(), 0);
}

#[test]
fn test_local_binding_shadows_parent() {
  let parent = Rc::new(Injector::new());
  parent.map_to::<dyn Store>(Rc::new(DiskStore));
  parent.map(String::from("parent"));

  let child = Injector::child_of(&parent);
  child.map_to::<dyn Store>(Rc::new(MemoryStore));

  assert_eq!(child.get::<dyn Store>().unwrap().name(), "memory");
  assert_eq!(parent.get::<dyn Store>().unwrap().name(), "disk");
  assert_eq!(*child.get::<String>().unwrap(), "parent");
}

#[test]
fn test_lookup_walks_the_whole_chain() {
  let root = Rc::new(Injector::new());
  root.map(1_i8);

  let middle = Rc::new(Injector::child_of(&root));
  middle.map(2_i16);

  let leaf = Injector::child_of(&middle);
  leaf.map(3_i32);

  assert_eq!(leaf.get::<i8>().as_deref(), Some(&1));
  assert_eq!(leaf.get::<i16>().as_deref(), Some(&2));
  assert_eq!(leaf.get::<i32>().as_deref(), Some(&3));
  assert!(leaf.get::<i64>().is_none());

  // Parents never see their children's bindings.
  assert!(root.get::<i16>().is_none());
  assert!(middle.get::<i32>().is_none());
}

#[test]
fn test_parent_bindings_added_later_are_visible() {
  let parent = Rc::new(Injector::new());
  let child = Injector::child_of(&parent);
  assert!(child.get::<bool>().is_none());

  parent.map(true);
  assert_eq!(child.get::<bool>().as_deref(), Some(&true));
}

#[test]
fn test_parent_shared_by_several_children() {
  let parent = Rc::new(Injector::new());
  parent.map(String::from("shared"));

  let a = Injector::child_of(&parent);
  let b = Injector::child_of(&parent);
  a.map(1_u8);

  assert!(Rc::ptr_eq(&a.get::<String>().unwrap(), &b.get::<String>().unwrap()));
  assert!(b.get::<u8>().is_none());
}

#[test]
fn test_set_parent_is_one_shot() {
  let first = Rc::new(Injector::new());
  first.map("first");
  let second = Rc::new(Injector::new());
  second.map("second");

  let child = Injector::new();
  assert!(child.parent().is_none());
  child.set_parent(&first).unwrap();

  assert_eq!(child.set_parent(&second), Err(InjectError::ParentAlreadySet));
  assert_eq!(child.get::<&'static str>().as_deref(), Some(&"first"));
  assert!(Rc::ptr_eq(&child.parent().unwrap(), &first));
}

#[test]
fn test_child_of_counts_as_set_parent() {
  let parent = Rc::new(Injector::new());
  let other = Rc::new(Injector::new());
  let child = Injector::child_of(&parent);
  assert_eq!(child.set_parent(&other), Err(InjectError::ParentAlreadySet));
}

#[test]
fn test_self_parent_is_rejected() {
  let injector = Rc::new(Injector::new());
  assert_eq!(injector.set_parent(&injector), Err(InjectError::SelfParent));
  assert!(injector.parent().is_none());
  assert!(injector.get::<u8>().is_none());
}

#[test]
fn test_invoke_resolves_across_scopes() {
  let parent = Rc::new(Injector::new());
  parent.map_to::<dyn Store>(Rc::new(DiskStore));

  let child = Injector::child_of(&parent);
  child.map(String::from("users"));

  let path = child
    .invoke(|store: Rc<dyn Store>, table: Rc<String>| format!("{}/{}", store.name(), table))
    .unwrap();
  assert_eq!(path, "disk/users");
}
