use proptest::prelude::*;
use vellum::prelude::*;
use vellum_strategy::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode(v in arb_value()) {
        let enc = encode_value_full(&v).unwrap();

        let dec = decode_value(&mut Reader::new(&enc[..])).ok();

        if dec != Some(v.clone()) {
            panic!("Tried encoding\n {}\n as \n{:x?}\n got \n{:?}\n", v, enc, dec)
        }
    }

    #[test]
    fn encoding_is_canonical(v in arb_value()) {
        let enc = encode_value_full(&v).unwrap();
        let dec = decode_value_full(&enc).unwrap();

        prop_assert_eq!(encode_value_full(&dec).unwrap(), enc);
    }

    #[test]
    fn truncation_always_fails(v in arb_value()) {
        let enc = encode_value_full(&v).unwrap();

        prop_assert!(decode_value_full(&enc[..enc.len() - 1]).is_err());
    }

    #[test]
    fn sink_choice_does_not_matter(v in arb_value()) {
        let enc = encode_value_full(&v).unwrap();

        let mut bm = bytes::BytesMut::new();
        encode_value(&v, &mut bm).unwrap();
        prop_assert_eq!(&bm[..], &enc[..]);

        let mut storage = vec![0u8; enc.len()];
        let mut w = SliceWriter::new(&mut storage);
        encode_value(&v, &mut w).unwrap();
        prop_assert_eq!(w.finalize(), enc.len());
        prop_assert_eq!(storage, enc);
    }
}
