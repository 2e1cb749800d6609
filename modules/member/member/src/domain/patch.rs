//! Reconciliation of a sparse member patch into field-level operations.

use member_sdk::models::{Member, MemberPatch};
use time::OffsetDateTime;

use super::fields::MemberField;

/// New value carried by a single patch operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Timestamp(OffsetDateTime),
}

/// One `(attribute, new value)` instruction.
///
/// Only built by [`PatchOperationSet::from_patch`], which always pairs
/// `MemberSince` with a timestamp and every other field with text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOperation {
    field: MemberField,
    value: FieldValue,
}

impl PatchOperation {
    #[must_use]
    pub fn field(&self) -> MemberField {
        self.field
    }

    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Writes this operation's value into the matching attribute of `member`.
    pub fn apply_to(&self, member: &mut Member) {
        match &self.value {
            FieldValue::Timestamp(ts) => {
                if self.field == MemberField::MemberSince {
                    member.member_since = Some(*ts);
                }
            }
            FieldValue::Text(text) => {
                if let Some(slot) = text_slot(member, self.field) {
                    *slot = Some(text.clone());
                }
            }
        }
    }
}

fn text_slot(member: &mut Member, field: MemberField) -> Option<&mut Option<String>> {
    match field {
        MemberField::FirstName => Some(&mut member.first_name),
        MemberField::LastName => Some(&mut member.last_name),
        MemberField::Email => Some(&mut member.email),
        MemberField::Phone => Some(&mut member.phone),
        MemberField::Address => Some(&mut member.address),
        MemberField::Country => Some(&mut member.country),
        MemberField::MemberSince => None,
    }
}

/// Rule deciding which supplied values count as "requested".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresencePolicy {
    /// Treat `Some("")` like an absent field.
    pub treat_empty_as_unset: bool,
}

impl Default for PresencePolicy {
    fn default() -> Self {
        Self {
            treat_empty_as_unset: true,
        }
    }
}

/// Operations derived from a [`MemberPatch`], in attribute declaration order.
///
/// Its length is the number of attributes the caller asked to change; an
/// empty set means the patch carried nothing to apply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchOperationSet {
    ops: Vec<PatchOperation>,
}

impl PatchOperationSet {
    #[must_use]
    pub fn from_patch(patch: &MemberPatch, policy: PresencePolicy) -> Self {
        let mut set = Self::default();
        set.push_text(MemberField::FirstName, patch.first_name.as_deref(), policy);
        set.push_text(MemberField::LastName, patch.last_name.as_deref(), policy);
        set.push_text(MemberField::Email, patch.email.as_deref(), policy);
        set.push_text(MemberField::Phone, patch.phone.as_deref(), policy);
        set.push_text(MemberField::Address, patch.address.as_deref(), policy);
        set.push_text(MemberField::Country, patch.country.as_deref(), policy);
        if let Some(ts) = patch.member_since {
            set.ops.push(PatchOperation {
                field: MemberField::MemberSince,
                value: FieldValue::Timestamp(ts),
            });
        }
        set
    }

    fn push_text(&mut self, field: MemberField, value: Option<&str>, policy: PresencePolicy) {
        let Some(text) = value else {
            return;
        };
        if text.is_empty() && policy.treat_empty_as_unset {
            return;
        }
        self.ops.push(PatchOperation {
            field,
            value: FieldValue::Text(text.to_owned()),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatchOperation> {
        self.ops.iter()
    }

    #[must_use]
    pub fn fields(&self) -> Vec<MemberField> {
        self.ops.iter().map(|op| op.field).collect()
    }

    /// Applies every operation to `member`. Does not touch `version`.
    pub fn apply_to(&self, member: &mut Member) {
        for op in &self.ops {
            op.apply_to(member);
        }
    }
}

impl<'a> IntoIterator for &'a PatchOperationSet {
    type Item = &'a PatchOperation;
    type IntoIter = std::slice::Iter<'a, PatchOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
