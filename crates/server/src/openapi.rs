use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PhoneAddressDoc { pub phone: String, pub address: String }

#[derive(ToSchema)]
pub struct NewPhoneAddressDoc {
    /// Phone number
    pub phone: String,
    /// Address
    pub address: String,
}

#[derive(ToSchema)]
pub struct UpdateAddressDoc {
    /// New address
    pub address: String,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub detail: String }

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phone-Address Service",
        version = "1.0.0",
        description = "Microservice for storing and managing phone-address pairs"
    ),
    paths(
        crate::routes::health,
        crate::routes::ready,
        crate::routes::phones::get_address,
        crate::routes::phones::create_phone_address,
        crate::routes::phones::update_address,
        crate::routes::phones::delete_phone_address,
    ),
    components(
        schemas(
            HealthResponse,
            PhoneAddressDoc,
            NewPhoneAddressDoc,
            UpdateAddressDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "phones")
    )
)]
pub struct ApiDoc;
