#[cfg(test)]
mod tests {
    use super::super::*;
    use member_sdk::models::{Member, MemberPatch, NewMember};
    use time::macros::datetime;

    #[test]
    fn test_member_to_dto_conversion() {
        let member = Member {
            id: "1".to_owned(),
            member_id: "M1".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            email: None,
            phone: None,
            address: None,
            country: Some("GB".to_owned()),
            member_since: Some(datetime!(2020-01-15 08:00 UTC)),
            version: 3,
        };

        let dto: dto::MemberDto = member.into();

        assert_eq!(dto.id, "1");
        assert_eq!(dto.member_id, "M1");
        assert_eq!(dto.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(dto.version, 3);
    }

    #[test]
    fn test_member_dto_serializes_camel_case() {
        let dto = dto::MemberDto {
            id: "1".to_owned(),
            member_id: "M1".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
            email: None,
            phone: None,
            address: None,
            country: None,
            member_since: Some(datetime!(2020-01-15 08:00 UTC)),
            version: 1,
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["memberId"], "M1");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["memberSince"], "2020-01-15T08:00:00Z");
        assert!(json["lastName"].is_null());
    }

    #[test]
    fn test_patch_request_absent_and_null_are_untouched() {
        let req: dto::PatchMemberRequest = serde_json::from_str(
            r#"{"id":"1","memberId":"M1","email":"a@b.com","phone":null}"#,
        )
        .unwrap();

        let patch: MemberPatch = req.into();

        assert_eq!(patch.id, "1");
        assert_eq!(patch.member_id, "M1");
        assert_eq!(patch.email.as_deref(), Some("a@b.com"));
        assert_eq!(patch.phone, None);
        assert_eq!(patch.country, None);
        assert_eq!(patch.member_since, None);
    }

    #[test]
    fn test_patch_request_missing_identity_defaults_to_empty() {
        let req: dto::PatchMemberRequest = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();

        assert!(req.id.is_empty());
        assert!(req.member_id.is_empty());
    }

    #[test]
    fn test_patch_request_parses_member_since() {
        let req: dto::PatchMemberRequest = serde_json::from_str(
            r#"{"id":"1","memberId":"M1","memberSince":"2021-06-30T12:00:00+02:00"}"#,
        )
        .unwrap();

        assert_eq!(req.member_since, Some(datetime!(2021-06-30 10:00 UTC)));
    }

    #[test]
    fn test_patch_request_rejects_bad_timestamp() {
        let result = serde_json::from_str::<dto::PatchMemberRequest>(
            r#"{"id":"1","memberId":"M1","memberSince":"yesterday"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_to_new_member() {
        let req = dto::CreateMemberRequest {
            id: "9".to_owned(),
            member_id: "M9".to_owned(),
            email: Some("z@z.io".to_owned()),
            ..dto::CreateMemberRequest::default()
        };

        let member: NewMember = req.into();

        assert_eq!(member.id, "9");
        assert_eq!(member.email.as_deref(), Some("z@z.io"));
        assert_eq!(member.first_name, None);
    }
}
