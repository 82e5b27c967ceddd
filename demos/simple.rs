use cmdring::{
    capacity,
    command::{Command, Operation, Shape},
    traits::*,
    HeapRb,
};

fn main() {
    assert!(capacity::check(6).is_err());
    let cap = capacity::check(2).unwrap();

    let rb = HeapRb::<Command>::new(cap.get());
    let (mut prod, mut cons) = rb.split();

    assert!(prod.push(Command::create(Shape::Circle, 10.0, 10.0)));
    assert!(prod.push(Command::Clear));
    assert!(prod.is_full());
    assert!(!prod.push(Command::create(Shape::Triangle, 0.0, 0.0)));

    let first = cons.front().map(Command::operation);
    assert_eq!(first, Some(Operation::CreateShape));
    assert!(cons.pop());

    assert_eq!(cons.try_pop(), Some(Command::Clear));
    assert_eq!(cons.front(), None);
    assert!(!cons.pop());
}
