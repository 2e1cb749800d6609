//! OpenAPI document for the member REST surface.

use utoipa::openapi::{
    ComponentsBuilder, OpenApi, OpenApiBuilder, Ref, Required,
    content::ContentBuilder,
    info::InfoBuilder,
    path::{
        HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
        PathsBuilder,
    },
    request_body::RequestBodyBuilder,
    response::{ResponseBuilder, ResponsesBuilder},
    schema::{ObjectBuilder, SchemaType, Type},
};

use super::dto::{CreateMemberRequest, MemberDto, PatchMemberRequest};
use super::problem::{APPLICATION_PROBLEM_JSON, Problem};
use super::routes::{MEMBER_ITEM_PATH, MEMBER_PATH, MEMBERS_PATH};

const APPLICATION_JSON: &str = "application/json";
const TAG: &str = "Member";

fn path_param(name: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(SchemaType::Type(Type::String))
                .build(),
        ))
        .build()
}

fn json_content(schema: &str) -> utoipa::openapi::content::Content {
    ContentBuilder::new()
        .schema(Some(Ref::from_schema_name(schema)))
        .build()
}

fn json_response(description: &str, schema: &str) -> utoipa::openapi::response::Response {
    ResponseBuilder::new()
        .description(description)
        .content(APPLICATION_JSON, json_content(schema))
        .build()
}

fn problem_response(description: &str) -> utoipa::openapi::response::Response {
    ResponseBuilder::new()
        .description(description)
        .content(APPLICATION_PROBLEM_JSON, json_content("Problem"))
        .build()
}

fn json_body(schema: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(APPLICATION_JSON, json_content(schema))
        .required(Some(Required::True))
        .build()
}

/// Builds the OpenAPI document describing every member route.
#[must_use]
pub fn build_openapi() -> OpenApi {
    let patch_member = OperationBuilder::new()
        .operation_id(Some("member.patch_member"))
        .summary(Some("Partially update a member"))
        .description(Some(
            "Applies every attribute present in the body; absent attributes are left untouched",
        ))
        .tag(TAG)
        .parameter(path_param("memberId"))
        .request_body(Some(json_body("PatchMemberRequest")))
        .responses(
            ResponsesBuilder::new()
                .response("202", ResponseBuilder::new().description("Patch accepted").build())
                .response("400", problem_response("Patch rejected"))
                .build(),
        )
        .build();

    let get_member = OperationBuilder::new()
        .operation_id(Some("member.get_member"))
        .summary(Some("Get a member"))
        .tag(TAG)
        .parameter(path_param("memberId"))
        .parameter(path_param("id"))
        .responses(
            ResponsesBuilder::new()
                .response("200", json_response("Member found", "MemberDto"))
                .response("400", problem_response("Invalid identity"))
                .response("404", problem_response("Member not found"))
                .response("500", problem_response("Internal error"))
                .build(),
        )
        .build();

    let create_member = OperationBuilder::new()
        .operation_id(Some("member.create_member"))
        .summary(Some("Create a member"))
        .tag(TAG)
        .request_body(Some(json_body("CreateMemberRequest")))
        .responses(
            ResponsesBuilder::new()
                .response("201", json_response("Member created", "MemberDto"))
                .response("400", problem_response("Invalid member"))
                .response("409", problem_response("Member already exists"))
                .response("500", problem_response("Internal error"))
                .build(),
        )
        .build();

    let paths = PathsBuilder::new()
        .path(
            MEMBERS_PATH,
            PathItemBuilder::new()
                .operation(HttpMethod::Post, create_member)
                .build(),
        )
        .path(
            MEMBER_PATH,
            PathItemBuilder::new()
                .operation(HttpMethod::Patch, patch_member)
                .build(),
        )
        .path(
            MEMBER_ITEM_PATH,
            PathItemBuilder::new()
                .operation(HttpMethod::Get, get_member)
                .build(),
        );

    let components = ComponentsBuilder::new()
        .schema_from::<MemberDto>()
        .schema_from::<PatchMemberRequest>()
        .schema_from::<CreateMemberRequest>()
        .schema_from::<Problem>()
        .build();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Member API")
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .paths(paths.build())
        .components(Some(components))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_member_routes() {
        let doc = serde_json::to_value(build_openapi()).unwrap();

        assert!(doc["paths"][MEMBERS_PATH]["post"].is_object());
        assert!(doc["paths"][MEMBER_PATH]["patch"].is_object());
        assert!(doc["paths"][MEMBER_ITEM_PATH]["get"].is_object());
        assert!(doc["paths"][MEMBER_PATH]["patch"]["responses"]["202"].is_object());
    }

    #[test]
    fn test_document_registers_schemas() {
        let doc = serde_json::to_value(build_openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];

        assert!(schemas["MemberDto"].is_object());
        assert!(schemas["PatchMemberRequest"].is_object());
        assert!(schemas["Problem"].is_object());
        assert!(schemas["MemberDto"]["properties"]["memberId"].is_object());
    }
}
