use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use service::directory::{NewPhoneAddress, PhoneAddress, UpdateAddress};

use crate::errors::ApiError;
use crate::extract::{PhonePath, ValidJson};
use crate::observability::track;
use crate::state::AppState;

/// Fetch the address associated with the given phone number.
#[utoipa::path(
    get,
    path = "/phones/{phone}",
    tag = "phones",
    params(("phone" = String, Path, description = "Phone number, used verbatim")),
    responses(
        (status = 200, description = "Address found", body = crate::openapi::PhoneAddressDoc),
        (status = 404, description = "The phone number is not present in storage.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_address(
    State(state): State<AppState>,
    PhonePath(phone): PhonePath,
) -> Result<Json<PhoneAddress>, ApiError> {
    let record = track("get", state.directory.get(&phone)).await?;
    Ok(Json(record))
}

/// Persist a new phone number with its address. Fails if the phone already exists.
#[utoipa::path(
    post,
    path = "/phones",
    tag = "phones",
    request_body = crate::openapi::NewPhoneAddressDoc,
    responses(
        (status = 201, description = "Phone number and address created.", body = crate::openapi::PhoneAddressDoc),
        (status = 409, description = "Phone number already exists.", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Malformed body.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_phone_address(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewPhoneAddress>,
) -> Result<(StatusCode, Json<PhoneAddress>), ApiError> {
    let record = track("create", state.directory.create(&input.phone, &input.address)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace the stored address for an existing phone number.
#[utoipa::path(
    put,
    path = "/phones/{phone}",
    tag = "phones",
    params(("phone" = String, Path, description = "Phone number, used verbatim")),
    request_body = crate::openapi::UpdateAddressDoc,
    responses(
        (status = 200, description = "Address updated.", body = crate::openapi::PhoneAddressDoc),
        (status = 404, description = "Phone number not found.", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Malformed body.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    PhonePath(phone): PhonePath,
    ValidJson(input): ValidJson<UpdateAddress>,
) -> Result<Json<PhoneAddress>, ApiError> {
    let record = track("update", state.directory.update(&phone, &input.address)).await?;
    Ok(Json(record))
}

/// Remove the phone number and its address from storage.
#[utoipa::path(
    delete,
    path = "/phones/{phone}",
    tag = "phones",
    params(("phone" = String, Path, description = "Phone number, used verbatim")),
    responses(
        (status = 204, description = "Phone number deleted."),
        (status = 404, description = "Phone number not found.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_phone_address(
    State(state): State<AppState>,
    PhonePath(phone): PhonePath,
) -> Result<StatusCode, ApiError> {
    track("delete", state.directory.delete(&phone)).await?;
    Ok(StatusCode::NO_CONTENT)
}
