#![no_main]

use libfuzzer_sys::fuzz_target;

// The first half of the input is sorted, the second half decides every comparison. The result
// order is unspecified, but the sort must terminate and keep exactly the original elements.
fuzz_target!(|data: &[u8]| {
    let (values, decisions) = data.split_at(data.len() / 2);

    let mut decision_idx = 0;
    let sorted = bmsort::sort_by(values, |_, _| {
        let bit = decisions
            .get(decision_idx % decisions.len().max(1))
            .is_some_and(|byte| byte & 1 == 1);
        decision_idx += 1;
        bit
    });

    let mut expected = values.to_vec();
    let mut actual = sorted;
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);
});
