//! Generated-input tests for ordering, arithmetic and subnet invariants.

use cidr_math::{Address, AddressError, NetworkAddress};
use num_bigint::BigInt;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::net::{Ipv4Addr, Ipv6Addr};

fn v4() -> impl Strategy<Value = Address> {
    any::<u32>().prop_map(Address::v4)
}

fn v6() -> impl Strategy<Value = Address> {
    any::<u128>().prop_map(Address::v6)
}

fn v4_net() -> impl Strategy<Value = NetworkAddress> {
    (v4(), 0..=32i32).prop_map(|(addr, prefix)| {
        NetworkAddress::new(addr, prefix).expect("prefix in range")
    })
}

fn v6_net() -> impl Strategy<Value = NetworkAddress> {
    (v6(), 0..=128i32).prop_map(|(addr, prefix)| {
        NetworkAddress::new(addr, prefix).expect("prefix in range")
    })
}

fn check_total_order(a: &Address, b: &Address, c: &Address) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.compare_to(a).unwrap(), Ordering::Equal);

    let ab = a.compare_to(b).unwrap();
    prop_assert_eq!(b.compare_to(a).unwrap(), ab.reverse());

    let bc = b.compare_to(c).unwrap();
    if ab != Ordering::Greater && bc != Ordering::Greater {
        prop_assert_ne!(a.compare_to(c).unwrap(), Ordering::Greater);
    }
    if ab == Ordering::Less && bc == Ordering::Less {
        prop_assert_eq!(a.compare_to(c).unwrap(), Ordering::Less);
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_v4_compare_matches_magnitude(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(Address::v4(a).compare_to(&Address::v4(b)).unwrap(), a.cmp(&b));
    }

    #[test]
    fn test_v6_compare_matches_magnitude(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(Address::v6(a).compare_to(&Address::v6(b)).unwrap(), a.cmp(&b));
    }

    #[test]
    fn test_v4_total_order(a in v4(), b in v4(), c in v4()) {
        check_total_order(&a, &b, &c)?;
    }

    #[test]
    fn test_v6_total_order(a in v6(), b in v6(), c in v6()) {
        check_total_order(&a, &b, &c)?;
    }

    #[test]
    fn test_v4_add_subtract_inverse(a in any::<u32>(), b in any::<u32>()) {
        let (addr, offset) = (Address::v4(a), Address::v4(b));
        match a.checked_add(b) {
            Some(sum) => {
                let added = addr.add_address(&offset).unwrap();
                prop_assert_eq!(added, Address::v4(sum));
                prop_assert_eq!(added.subtract_address(&offset).unwrap(), addr);
            }
            None => prop_assert!(matches!(
                addr.add_address(&offset),
                Err(AddressError::ArithmeticRange(_))
            )),
        }
    }

    #[test]
    fn test_v6_add_subtract_inverse(a in any::<u128>(), b in any::<u128>()) {
        let (addr, offset) = (Address::v6(a), Address::v6(b));
        match a.checked_add(b) {
            Some(sum) => {
                let added = addr.add_address(&offset).unwrap();
                prop_assert_eq!(added, Address::v6(sum));
                prop_assert_eq!(added.subtract_address(&offset).unwrap(), addr);
            }
            None => prop_assert!(matches!(
                addr.add_address(&offset),
                Err(AddressError::ArithmeticRange(_))
            )),
        }
    }

    #[test]
    fn test_bitwise_identities(a in prop_oneof![v4(), v6()]) {
        let zero = a.bitwise_xor(&a).unwrap();
        prop_assert_eq!(a.bitwise_and(&a).unwrap(), a);
        prop_assert_eq!(a.bitwise_or(&a).unwrap(), a);
        prop_assert_eq!(zero.bitwise_or(&a).unwrap(), a);
        prop_assert_eq!(zero.bitwise_not().bitwise_and(&a).unwrap(), a);
        prop_assert_eq!(a.bitwise_not().bitwise_not(), a);
    }

    #[test]
    fn test_v4_text_round_trip(bits in any::<u32>()) {
        let addr = Address::v4(bits);
        prop_assert_eq!(addr.to_string(), Ipv4Addr::from(bits).to_string());
        prop_assert_eq!(Address::parse(&addr.to_string()).unwrap(), addr);
    }

    #[test]
    fn test_v6_text_round_trip(bits in any::<u128>()) {
        let addr = Address::v6(bits);
        prop_assert_eq!(Address::parse(&addr.to_string()).unwrap(), addr);
        // std renders compressed and IPv4-mapped forms
        let compressed = Ipv6Addr::from(bits).to_string();
        prop_assert_eq!(Address::parse(&compressed).unwrap(), addr);
    }

    #[test]
    fn test_network_range(n in prop_oneof![v4_net(), v6_net()]) {
        let (start, end) = (n.network_start(), n.network_end());
        prop_assert!(start <= n.address() && n.address() <= end);
        prop_assert!(n.encloses_address(&n.address()).unwrap());
        prop_assert_eq!(start.add(BigInt::from(n.address_count()) - 1).unwrap(), end);
        prop_assert!(n.network_identifier().is_network_identifier());
        prop_assert_eq!(n.network_identifier().network_end(), end);
        prop_assert_eq!(n.address_in_network(0, None).unwrap(), start);
        prop_assert_eq!(n.address_in_network(0, Some(false)).unwrap(), end);
    }

    #[test]
    fn test_v4_shares_subnet_space_symmetric(a in v4_net(), b in v4_net()) {
        let forward = a.shares_subnet_space(&b).unwrap();
        prop_assert_eq!(forward, b.shares_subnet_space(&a).unwrap());
        if a.prefix_length() <= b.prefix_length() {
            prop_assert_eq!(a.encloses_subnet(&b).unwrap(), forward);
        }
    }

    #[test]
    fn test_v6_shares_subnet_space_symmetric(a in v6_net(), b in v6_net()) {
        prop_assert_eq!(a.shares_subnet_space(&b).unwrap(), b.shares_subnet_space(&a).unwrap());
    }
}
