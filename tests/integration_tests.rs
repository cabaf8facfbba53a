use binary_adder::{add_binary, AdderError, BitString};

fn normalize(bits: &str) -> String {
    let trimmed = bits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[test]
fn test_documented_examples() {
    let cases = [
        ("11", "1", "100"),
        ("1010", "1011", "10101"),
        ("0", "0", "0"),
        ("1111", "1111", "11110"),
    ];

    for (a, b, expected) in cases {
        assert_eq!(add_binary(a, b).unwrap(), expected, "{} + {}", a, b);
    }
}

#[test]
fn test_empty_operand_rejected() {
    let err = add_binary("1", "").unwrap_err();
    assert!(matches!(err, AdderError::InvalidArgument { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_invalid_characters_rejected() {
    for bad in ["2", "1 1", "0b101", "١", "10\n"] {
        assert!(
            matches!(add_binary(bad, "1"), Err(AdderError::InvalidArgument { .. })),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_sum_equals_integer_sum() {
    let operands = ["0", "1", "10", "0111", "1010", "110011", "00000", "11111111"];

    for a in operands {
        for b in operands {
            let sum = add_binary(a, b).unwrap();
            let expected = u32::from_str_radix(a, 2).unwrap() + u32::from_str_radix(b, 2).unwrap();
            assert_eq!(u32::from_str_radix(&sum, 2).unwrap(), expected);
            assert_eq!(sum, add_binary(b, a).unwrap());
            assert!(sum.len() <= a.len().max(b.len()) + 1);
        }
        assert_eq!(add_binary(a, "0").unwrap(), normalize(a));
    }
}

#[test]
fn test_bit_string_api() {
    let a: BitString = "0110".parse().unwrap();
    let b = BitString::parse("b", "11").unwrap();

    assert_eq!((&a + &b).as_str(), "1001");
    assert_eq!(a.normalized().to_string(), "110");
    assert_eq!(String::from(a.add(&BitString::zero())), "110");
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            std::thread::spawn(move || {
                let a = format!("{:b}", i * 37);
                let b = format!("{:b}", i * 11 + 1);
                (i, add_binary(&a, &b).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, sum) = handle.join().unwrap();
        assert_eq!(u32::from_str_radix(&sum, 2).unwrap(), i * 37 + i * 11 + 1);
    }
}
