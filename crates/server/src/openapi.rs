use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClientDoc { pub id: i64, pub name: String, pub surname: String, pub email: String }

#[derive(ToSchema)]
pub struct NewClientRequest { pub name: String, pub surname: String, pub email: String }

#[derive(ToSchema)]
pub struct ClientChangesRequest { pub name: Option<String>, pub surname: Option<String>, pub email: Option<String> }

#[derive(ToSchema)]
pub struct ItemDoc { pub id: i64, pub name: String, pub price_cents: i64 }

#[derive(ToSchema)]
pub struct NewItemRequest { pub name: String, pub price_cents: i64 }

#[derive(ToSchema)]
pub struct OrderDoc { pub id: i64, pub client_id: Option<i64>, pub items: Vec<ItemDoc> }

#[derive(ToSchema)]
pub struct NewOrderRequest { pub client_id: Option<i64> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::clients::get,
        crate::routes::clients::update,
        crate::routes::clients::delete,
        crate::routes::clients::by_email,
        crate::routes::clients::by_name,
        crate::routes::clients::by_surname,
        crate::routes::clients::orders,
        crate::routes::items::list,
        crate::routes::items::create,
        crate::routes::items::get,
        crate::routes::items::delete,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::get,
        crate::routes::orders::delete,
        crate::routes::orders::assign_client,
        crate::routes::orders::add_item,
    ),
    components(
        schemas(
            HealthResponse,
            ClientDoc,
            NewClientRequest,
            ClientChangesRequest,
            ItemDoc,
            NewItemRequest,
            OrderDoc,
            NewOrderRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "items"),
        (name = "orders")
    )
)]
pub struct ApiDoc;
