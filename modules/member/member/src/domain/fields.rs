use std::fmt;

/// Mutable member attributes, in declaration order.
///
/// `id` and `memberId` are deliberately absent: they address the record and
/// are never the target of a field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Country,
    MemberSince,
}

impl MemberField {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Country,
        Self::MemberSince,
    ];

    /// Wire name of the attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Country => "country",
            Self::MemberSince => "memberSince",
        }
    }
}

impl fmt::Display for MemberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        let names: Vec<&str> = MemberField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "firstName",
                "lastName",
                "email",
                "phone",
                "address",
                "country",
                "memberSince"
            ]
        );
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(MemberField::MemberSince.to_string(), "memberSince");
    }
}
