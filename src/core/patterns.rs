//! Named regular-expression patterns used as command arguments.
//!
//! Each pattern carries a human-readable label that is shown in help
//! listings and completion hints instead of the raw regex. Lookups are by
//! exact pattern string; a pattern that is not in the catalog (for example
//! a plain keyword such as `history`) labels as itself.

// ============================================================================
// Catalog
// ============================================================================

/// IPv4 address.
pub const IP: &str = r"^((25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(25[0-5]|2[0-4]\d|[01]?\d\d?)$";

/// IPv4 address with prefix length.
pub const CIDR: &str = r"^(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?:\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}/(?:3[0-2]|[0-2]?[0-9])$";

/// Ethernet hardware address.
pub const MAC: &str = r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$";

/// Inclusive port range such as `1000-2000`.
pub const PORT_RANGE: &str = r"^([0-9]+)-([0-9]+)$";

/// Transport protocol name.
pub const PROTOCOL: &str = r"^(tcp|udp|icmp|icmpv6)$";

/// Unsigned decimal number.
pub const NUMBER: &str = r"[0-9]+";

/// Identifier made of letters, digits, underscore, hyphen and dot.
pub const NAME: &str = r"([a-zA-Z0-9_\-\.])+";

/// Routing table id or well-known table name.
pub const TABLE: &str = r"^[0-9]+$|^local$|^main$|^default$";

/// Any non-empty path.
pub const FILE_PATH: &str = r".+";

/// Size with an optional unit suffix.
pub const UNIT: &str = r"[0-9]+[kKmMgGtT]?";

/// A registered pattern and the hint shown for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternDescriptor {
    pub pattern: &'static str,
    pub label: &'static str,
}

static CATALOG: &[PatternDescriptor] = &[
    PatternDescriptor {
        pattern: IP,
        label: "IP(xxx.xxx.xxx.xxx)",
    },
    PatternDescriptor {
        pattern: CIDR,
        label: "CIDR(IP/MASK)",
    },
    PatternDescriptor {
        pattern: MAC,
        label: "MAC(XX:XX:XX:XX:XX:XX)",
    },
    PatternDescriptor {
        pattern: PORT_RANGE,
        label: "PORT_RANGE(1-65535)",
    },
    PatternDescriptor {
        pattern: PROTOCOL,
        label: "PROTOCOL(tcp|udp|icmp|icmpv6)",
    },
    PatternDescriptor {
        pattern: NUMBER,
        label: "NUMBER",
    },
    PatternDescriptor {
        pattern: NAME,
        label: "NAME(only number, letter, underscore, hyphen and dot)",
    },
    PatternDescriptor {
        pattern: TABLE,
        label: "TABLE(0-255|local|main|default)",
    },
    PatternDescriptor {
        pattern: FILE_PATH,
        label: "FILE_PATH(only number, letter and /._-~)",
    },
    PatternDescriptor {
        pattern: UNIT,
        label: "UNIT(k|m|g|t)",
    },
];

// ============================================================================
// Lookup
// ============================================================================

/// All catalog entries, in declaration order.
pub fn catalog() -> &'static [PatternDescriptor] {
    CATALOG
}

/// Find the catalog entry for an exact pattern string.
pub fn descriptor(pattern: &str) -> Option<&'static PatternDescriptor> {
    CATALOG.iter().find(|d| d.pattern == pattern)
}

/// Human-readable label for a pattern, falling back to the pattern itself.
pub fn label_for(pattern: &str) -> &str {
    match descriptor(pattern) {
        Some(d) => d.label,
        None => pattern,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_catalog_patterns_compile() {
        for d in catalog() {
            assert!(Regex::new(d.pattern).is_ok(), "bad pattern {}", d.label);
        }
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_for(NUMBER), "NUMBER");
        assert_eq!(label_for(CIDR), "CIDR(IP/MASK)");
        assert_eq!(label_for("history"), "history");
        assert!(descriptor("history").is_none());
    }

    #[test]
    fn test_catalog_samples() {
        let ip = Regex::new(IP).unwrap();
        assert!(ip.is_match("192.168.0.1"));
        assert!(!ip.is_match("256.1.1.1"));

        let cidr = Regex::new(CIDR).unwrap();
        assert!(cidr.is_match("10.0.0.0/8"));
        assert!(!cidr.is_match("10.0.0.0/33"));

        let mac = Regex::new(MAC).unwrap();
        assert!(mac.is_match("aa:bb:cc:dd:ee:ff"));

        let table = Regex::new(TABLE).unwrap();
        assert!(table.is_match("main"));
        assert!(table.is_match("254"));
        assert!(!table.is_match("mainx"));
    }
}
