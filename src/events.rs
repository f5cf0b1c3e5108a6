//! Closures as values, and a synchronous publish/subscribe point built on a
//! list of boxed listeners.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::Write;
use std::rc::Rc;

use crate::console::Console;
use crate::error::Result;

/// Receives the publisher's name and the event payload.
pub type Listener<E> = Box<dyn Fn(&str, &E)>;

pub struct EventPublisher<E> {
    name: String,
    listeners: Vec<Listener<E>>,
}

impl<E> EventPublisher<E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            listeners: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&str, &E) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Invokes every listener in registration order, on the caller's thread.
    pub fn notify(&self, event: &E) {
        for listener in &self.listeners {
            listener(&self.name, event);
        }
    }
}

impl<E: Display> EventPublisher<E> {
    pub fn publish<W: Write>(&self, console: &mut Console<W>, event: &E) -> Result<()> {
        console.line(format!("Publishing: {event}"))?;
        self.notify(event);
        Ok(())
    }
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Closures and Events")?;

    let print_action = |message: &str| format!("Action: {message}");
    console.line(print_action("Hello from a closure!"))?;

    let add: fn(i32, i32) -> i32 = |a, b| a + b;
    console.field("Func result", add(5, 3))?;

    let is_even = |n: i32| n % 2 == 0;
    console.line(format!("Is 4 even? {}", is_even(4)))?;

    // Listeners cannot borrow the console while `publish` holds it, so they
    // record into a shared log that is flushed afterwards.
    let received = Rc::new(RefCell::new(Vec::new()));
    let mut publisher = EventPublisher::new("publisher");
    let log = Rc::clone(&received);
    publisher.subscribe(move |_sender: &str, message: &String| {
        log.borrow_mut().push(format!("Event received: {message}"));
    });

    publisher.publish(console, &"Hello from event!".to_string())?;
    for line in received.borrow().iter() {
        console.line(line)?;
    }
    console.blank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Rc::clone(&log), log)
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let (log, handle) = recorder();
        let mut publisher = EventPublisher::new("orders");

        for id in 1..=3 {
            let log = Rc::clone(&log);
            publisher.subscribe(move |_: &str, event: &i32| {
                log.borrow_mut().push(format!("listener {id} got {event}"));
            });
        }

        publisher.notify(&7);
        assert_eq!(
            *handle.borrow(),
            vec!["listener 1 got 7", "listener 2 got 7", "listener 3 got 7"]
        );
    }

    #[test]
    fn test_publish_without_listeners() {
        let publisher: EventPublisher<String> = EventPublisher::new("empty");
        let mut console = Console::buffer();
        publisher.publish(&mut console, &"ping".to_string()).unwrap();

        assert_eq!(publisher.listener_count(), 0);
        assert_eq!(console.contents(), "Publishing: ping\n");
    }

    #[test]
    fn test_listener_sees_sender_name() {
        let (log, handle) = recorder();
        let mut publisher: EventPublisher<&'static str> = EventPublisher::new("alerts");
        publisher.subscribe(move |sender: &str, event: &&str| {
            log.borrow_mut().push(format!("{sender}:{event}"));
        });

        publisher.notify(&"disk full");
        publisher.notify(&"disk ok");
        assert_eq!(*handle.borrow(), vec!["alerts:disk full", "alerts:disk ok"]);
        assert_eq!(publisher.name(), "alerts");
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::buffer();
        demo(&mut console).unwrap();

        assert_eq!(
            console.contents(),
            "--- Closures and Events ---\n\
             Action: Hello from a closure!\n\
             Func result: 8\n\
             Is 4 even? true\n\
             Publishing: Hello from event!\n\
             Event received: Hello from event!\n\n"
        );
    }
}
