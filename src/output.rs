use std::sync::atomic::{AtomicBool, Ordering};

// In machine-output mode stdout carries only the derived result and any
// human chatter moves to stderr.
static MACHINE_OUTPUT: AtomicBool = AtomicBool::new(false);

pub fn set_machine_output(enabled: bool) {
    MACHINE_OUTPUT.store(enabled, Ordering::Relaxed);
}

pub fn is_machine_output() -> bool {
    MACHINE_OUTPUT.load(Ordering::Relaxed)
}

/// Print a derived result on stdout, in either mode.
pub fn print_value(value: &str) {
    println!("{value}");
}

#[macro_export]
macro_rules! outln {
    () => {
        if $crate::output::is_machine_output() {
            eprintln!();
        } else {
            println!();
        }
    };
    ($($arg:tt)*) => {
        if $crate::output::is_machine_output() {
            eprintln!($($arg)*);
        } else {
            println!($($arg)*);
        }
    };
}
