// Template Method: a fixed algorithm skeleton with required steps and
// optional hooks supplied by each variant.

use crate::console::Console;

/// Steps a variant plugs into [`template_method`].
///
/// The skeleton itself is a free function, so implementors can fill in
/// steps but never reorder or skip them.
pub trait AbstractClass {
    fn required_operations1(&self, console: &mut Console);

    fn required_operations2(&self, console: &mut Console);

    fn hook1(&self, _console: &mut Console) {}

    fn hook2(&self, _console: &mut Console) {}
}

pub fn template_method(class: &dyn AbstractClass, console: &mut Console) {
    base_operation1(console);
    class.required_operations1(console);
    base_operation2(console);
    class.hook1(console);
    class.required_operations2(console);
    base_operation3(console);
    class.hook2(console);
}

fn base_operation1(console: &mut Console) {
    console.say("AbstractClass says: I am doing the bulk of the work");
}

fn base_operation2(console: &mut Console) {
    console.say("AbstractClass says: But I let subclasses override some operations");
}

fn base_operation3(console: &mut Console) {
    console.say("AbstractClass says: But I am doing the bulk of the work anyway");
}

// ============================================================================
// Variants
// ============================================================================

pub struct ConcreteClass1;

impl AbstractClass for ConcreteClass1 {
    fn required_operations1(&self, console: &mut Console) {
        console.say("ConcreteClass1 says: Implemented Operation1");
    }

    fn required_operations2(&self, console: &mut Console) {
        console.say("ConcreteClass1 says: Implemented Operation2");
    }
}

/// Overrides only a fraction of the steps.
pub struct ConcreteClass2;

impl AbstractClass for ConcreteClass2 {
    fn required_operations1(&self, console: &mut Console) {
        console.say("ConcreteClass2 says: Implemented Operation1");
    }

    fn required_operations2(&self, console: &mut Console) {
        console.say("ConcreteClass2 says: Implemented Operation2");
    }

    fn hook1(&self, console: &mut Console) {
        console.say("ConcreteClass2 says: Overridden Hook1");
    }
}

// ============================================================================
// Client code
// ============================================================================

/// Works with any variant through the trait object alone.
pub fn client_code(class: &dyn AbstractClass, console: &mut Console) {
    template_method(class, console);
}

pub fn run_demo(console: &mut Console) {
    console.heading("Same client code can work with different subclasses:");
    client_code(&ConcreteClass1, console);

    console.blank();
    console.blank();

    console.heading("Same client code can work with different subclasses:");
    client_code(&ConcreteClass2, console);
}
