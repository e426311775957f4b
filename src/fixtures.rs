//! Named demo inputs.
//!
//! Each input is a fixed permutation of its data so that every run, and
//! every test built on these cases, sees the same order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCase {
    pub name: &'static str,
    pub tokens: &'static [&'static str],
}

pub const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        name: "original example",
        tokens: &[
            "a01", "1002", "b001", "000", "ab0", "6002", "a0000", "0001", "aa01", "100", "500",
            "0000", "a00",
        ],
    },
    DemoCase {
        name: "mixed alphanumeric values",
        tokens: &["000", "0000", "100", "a00", "a000", "b00", "1002", "500"],
    },
    DemoCase {
        name: "mixed numbers and letters",
        tokens: &["2z", "a1", "1z", "z1", "2a", "1a"],
    },
    DemoCase {
        name: "different lengths",
        tokens: &["aaa", "1", "aa", "111", "a", "11"],
    },
    DemoCase {
        name: "leading zeros",
        tokens: &["01", "0001", "1", "001"],
    },
    DemoCase {
        name: "mixed case letters",
        tokens: &["b1", "A1", "B1", "a1"],
    },
    DemoCase {
        name: "single characters",
        tokens: &["y", "9", "b", "7", "z", "a", "8", "c", "x"],
    },
    DemoCase {
        name: "pure numbers",
        tokens: &["5", "10", "2", "100", "1", "25", "3"],
    },
    DemoCase {
        name: "alphabetic prefixes",
        tokens: &["a1", "a10", "a2", "b1", "b10", "c5", "aa1"],
    },
    DemoCase {
        name: "numbers and codes",
        tokens: &["z99", "a1", "100", "50", "z1", "b20"],
    },
    DemoCase {
        name: "item numbers",
        tokens: &[
            "94536", "1016B", "a8921", "1021", "1059EMGM", "23463", "1087EX", "tb666", "1015",
            "1098B", "64348790", "1069B", "b3549", "1022", "1037B", "87554", "1081G", "1234",
        ],
    },
];

pub fn find(name: &str) -> Option<&'static DemoCase> {
    DEMO_CASES.iter().find(|case| case.name == name)
}
