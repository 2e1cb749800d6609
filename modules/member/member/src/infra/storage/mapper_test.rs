#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::domain::fields::MemberField;
    use crate::domain::repo::RepoError;
    use member_sdk::models::{Member, NewMember};
    use sea_orm::{ActiveValue, IdenStatic};
    use time::macros::datetime;

    fn model(version: i64) -> entity::Model {
        entity::Model {
            id: "1".to_owned(),
            member_id: "M1".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
            email: Some("ada@example.com".to_owned()),
            phone: None,
            address: None,
            country: Some("UK".to_owned()),
            member_since: Some(datetime!(2020-01-01 00:00 UTC)),
            version,
        }
    }

    #[test]
    fn test_entity_to_member_conversion() {
        let member = Member::try_from(model(4)).unwrap();

        assert_eq!(member.id, "1");
        assert_eq!(member.member_id, "M1");
        assert_eq!(member.first_name.as_deref(), Some("Ada"));
        assert_eq!(member.last_name, None);
        assert_eq!(member.country.as_deref(), Some("UK"));
        assert_eq!(member.member_since, Some(datetime!(2020-01-01 00:00 UTC)));
        assert_eq!(member.version, 4);
    }

    #[test]
    fn test_negative_version_is_a_storage_error() {
        let err = Member::try_from(model(-1)).unwrap_err();

        assert!(matches!(err, RepoError::Storage(_)));
        assert!(err.to_string().contains("invalid version -1"), "{err}");
    }

    #[test]
    fn test_new_member_starts_at_version_one() {
        let active: entity::ActiveModel = NewMember {
            id: "1".to_owned(),
            member_id: "M1".to_owned(),
            ..NewMember::default()
        }
        .into();

        assert_eq!(active.version, ActiveValue::Set(1));
        assert_eq!(active.email, ActiveValue::Set(None));
    }

    #[test]
    fn test_every_field_maps_to_its_column() {
        let columns: Vec<String> = MemberField::ALL
            .iter()
            .map(|field| mapper::column_for(*field).as_str().to_owned())
            .collect();

        assert_eq!(
            columns,
            vec![
                "first_name",
                "last_name",
                "email",
                "phone",
                "address",
                "country",
                "member_since"
            ]
        );
    }
}
