use proptest::prelude::*;
use vellum::prelude::*;

#[derive(Wire, Clone, Copy, Debug, PartialEq)]
#[repr(i8)]
enum Qux {
    Abc,
    Def,
    Neg = -2,
}

#[derive(Wire, Clone, Copy, Debug, PartialEq)]
#[repr(u16)]
enum Level {
    Low = 1,
    High = 300,
}

#[derive(Wire, Clone, Copy, Debug, PartialEq)]
#[allow(conflicting_repr_hints)]
#[repr(C, i32)]
enum Sign {
    Minus = -1,
    Plus = 1,
}

#[derive(Wire, Clone, Debug, PartialEq)]
struct Foo {
    a: u8,
    e: Qux,
    s: String,
}

fn check<T: Ser + De + PartialEq + std::fmt::Debug>(t: T, expected: &[u8]) {
    assert_eq!(encode_full(&t).unwrap(), expected, "encoding {:?}", t);
    assert_eq!(decode_exact::<T>(expected).unwrap(), t);
}

#[test]
fn one_byte_discriminants_are_raw() {
    check(Qux::Abc, &[0]);
    check(Qux::Def, &[1]);
    check(Qux::Neg, &[0xfe]);
}

#[test]
fn wider_discriminants_are_varints() {
    check(Level::Low, &[1]);
    check(Level::High, &[172, 2]);
    check(Sign::Plus, &[1]);
    check(Sign::Minus, &[255, 255, 255, 255, 255, 255, 255, 255, 255, 1]);
}

#[test]
fn unknown_discriminant_is_a_type_mismatch() {
    match decode_full::<Qux>(&[7]).unwrap_err().into_kind() {
        ErrorKind::TypeMismatch(msg) => {
            assert_eq!(msg, "no `Qux` variant has discriminant 7")
        }
        other => panic!("unexpected error: {}", other),
    }

    match decode_full::<Level>(&[2]).unwrap_err().into_kind() {
        ErrorKind::TypeMismatch(_) => {}
        other => panic!("unexpected error: {}", other),
    }

    assert_eq!(
        decode_full::<Qux>(&[]).unwrap_err().kind(),
        &ErrorKind::EndOfBuffer { needed: 1, remaining: 0 }
    );
}

#[test]
fn enum_field_in_a_record() {
    let foo = Foo { a: 9, e: Qux::Def, s: "hi".to_string() };
    check(foo.clone(), &[9, 1, 2, b'h', b'i']);

    let err = decode_full::<Foo>(&[9, 5, 2, b'h', b'i']).unwrap_err();
    assert_eq!(err.path().cloned().collect::<Vec<_>>(), vec![Segment::Field("e")]);

    let mut dest = Foo { a: 0, e: Qux::Neg, s: String::new() };
    decode_into(&mut Reader::new(&[9, 1, 2, b'h', b'i'][..]), &mut dest).unwrap();
    assert_eq!(dest, foo);
}

fn arb_level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Low), Just(Level::High)]
}

proptest! {
    #[test]
    fn sequences_of_enums(levels in prop::collection::vec(arb_level(), 0..64)) {
        let enc = encode_full(&levels).unwrap();
        prop_assert_eq!(decode_exact::<Vec<Level>>(&enc).unwrap(), levels);
    }
}
