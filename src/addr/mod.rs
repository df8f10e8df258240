//! Textual-address-to-bit-key conversion.
//!
//! Grounded in the teacher's `AddressFamily::from_ipaddr` (`types/af.rs`):
//! parse via `std::net::IpAddr`, then hand the family's raw octets to
//! `BitString` through the two-step storage handoff spec.md §9 mandates —
//! obtain a mutable byte view, write the address, then declare the
//! logical length.


use crate::bitstring::BitString;
use crate::error::AddrParseError;
use crate::table::AddressKey;

fn write_key<const N: usize>(octets: &[u8], len: usize) -> BitString<N> {
    let mut bs = BitString::<N>::new();
    bs.storage_mut()[..octets.len()].copy_from_slice(octets);
    bs.set_len(len)
        .expect("length was checked against the family cap before this call");
    bs
}

/// Parses a full-width query address (spec.md §6.3): the logical length is
/// always the family's full width (32 for IPv4, 128 for IPv6).
pub fn parse_address(text: &str) -> Result<AddressKey, AddrParseError> {
    let ip: std::net::IpAddr = text
        .parse()
        .map_err(|_| AddrParseError::Invalid(text.to_string()))?;
    Ok(match ip {
        std::net::IpAddr::V4(v4) => AddressKey::V4(write_key(&v4.octets(), 32)),
        std::net::IpAddr::V6(v6) => AddressKey::V6(write_key(&v6.octets(), 128)),
    })
}

/// Parses a loaded subnet (spec.md §6.2): `addr_text` is the textual
/// address, `len` the declared prefix length. Fails if `len` exceeds the
/// family's cap (32 for IPv4, 128 for IPv6) — this is the load-time error
/// spec.md §4.3 requires.
pub fn parse_prefix(addr_text: &str, len: u32) -> Result<AddressKey, AddrParseError> {
    let ip: std::net::IpAddr = addr_text
        .parse()
        .map_err(|_| AddrParseError::Invalid(addr_text.to_string()))?;
    match ip {
        std::net::IpAddr::V4(v4) => {
            if len > 32 {
                return Err(AddrParseError::PrefixLenOutOfRange {
                    family: "IPv4",
                    len,
                    max: 32,
                });
            }
            Ok(AddressKey::V4(write_key(&v4.octets(), len as usize)))
        }
        std::net::IpAddr::V6(v6) => {
            if len > 128 {
                return Err(AddrParseError::PrefixLenOutOfRange {
                    family: "IPv6",
                    len,
                    max: 128,
                });
            }
            Ok(AddressKey::V6(write_key(&v6.octets(), len as usize)))
        }
    }
}
