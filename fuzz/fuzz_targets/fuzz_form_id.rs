#![no_main]

use libfuzzer_sys::fuzz_target;

use plantsafe::FormId;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(id) = text.parse::<FormId>() {
            // Display must give back something that parses to the same id
            assert_eq!(id.to_string().parse::<FormId>().ok(), Some(id));
        }
    }
});
