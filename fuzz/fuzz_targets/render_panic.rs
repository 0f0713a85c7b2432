#![no_main]
use libfuzzer_sys::fuzz_target;
use moa_notation_macros::{builtin, Expander, MacroEntry};

fuzz_target!(|data: &[u8]| {
    // Rendering must report errors, never panic.
    let s = String::from_utf8_lossy(data);
    let _ = Expander::new(builtin::table()).render(&s);

    // Any template either registers or is rejected cleanly.
    for arity in 0..=9 {
        let _ = MacroEntry::new("fuzz", arity, &s);
    }
});
