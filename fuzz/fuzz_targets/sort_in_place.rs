#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    bmsort::sort_in_place_by(&mut v, |a, b| a < b);

    assert!(bmsort::is_sorted_by(&v, |a, b| a < b));

    let mut expected = data.to_vec();
    expected.sort_unstable();
    assert_eq!(v, expected);
});
