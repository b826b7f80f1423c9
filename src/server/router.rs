use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        contact::{ContactDto, CourseRequestDto},
        course::{CourseDto, CoursesDto, LectureDto, LecturesDto, MediaDto},
        stats::{DashboardStatsDto, StatsPointDto},
        subscription::{GatewayKeyDto, PaymentVerificationDto, SubscribeResponseDto},
        user::{
            AuthResponseDto, AvatarDto, ChangePasswordDto, ForgetPasswordDto, LoginDto,
            PlaylistItemDto, PlaylistRequestDto, ResetPasswordDto, SubscriptionDto,
            UpdateProfileDto, UserDto, UserResponseDto, UsersDto,
        },
    },
    server::{
        controller::{admin, auth, contact, course, subscription, user},
        state::AppState,
    },
};

/// Path prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

#[derive(OpenApi)]
#[openapi(
    info(title = "Course Bundler API", description = "Courses, subscriptions and platform statistics"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::forget_password,
        auth::reset_password,
        user::get_my_profile,
        user::delete_my_profile,
        user::change_password,
        user::update_profile,
        user::update_profile_picture,
        user::add_to_playlist,
        user::remove_from_playlist,
        admin::get_all_users,
        admin::update_user_role,
        admin::delete_user,
        admin::get_dashboard_stats,
        course::get_all_courses,
        course::create_course,
        course::get_course_lectures,
        course::add_lecture,
        course::delete_course,
        course::delete_lecture,
        subscription::buy_subscription,
        subscription::payment_verification,
        subscription::get_razorpay_key,
        subscription::cancel_subscription,
        contact::contact,
        contact::course_request,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        AvatarDto,
        SubscriptionDto,
        PlaylistItemDto,
        UserDto,
        UserResponseDto,
        AuthResponseDto,
        UsersDto,
        LoginDto,
        ChangePasswordDto,
        UpdateProfileDto,
        ForgetPasswordDto,
        ResetPasswordDto,
        PlaylistRequestDto,
        MediaDto,
        CourseDto,
        LectureDto,
        CoursesDto,
        LecturesDto,
        SubscribeResponseDto,
        PaymentVerificationDto,
        GatewayKeyDto,
        StatsPointDto,
        DashboardStatsDto,
        ContactDto,
        CourseRequestDto,
    )),
    tags(
        (name = "auth", description = "Registration, login and password reset"),
        (name = "user", description = "Profile and playlist of the signed-in user"),
        (name = "admin", description = "User management and dashboard statistics"),
        (name = "course", description = "Course catalogue and lectures"),
        (name = "subscription", description = "Subscription checkout and cancellation"),
        (name = "contact", description = "Messages to the site owner"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let api = Router::new()
        // Accounts
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/forgetpassword", post(auth::forget_password))
        .route("/resetpassword/{token}", put(auth::reset_password))
        .route(
            "/me",
            get(user::get_my_profile).delete(user::delete_my_profile),
        )
        .route("/changepassword", put(user::change_password))
        .route("/updateprofile", put(user::update_profile))
        .route("/updateprofilepicture", put(user::update_profile_picture))
        .route("/addtoplaylist", post(user::add_to_playlist))
        .route(
            "/removefromplaylist",
            delete(user::remove_from_playlist),
        )
        // Admin
        .route("/admin/users", get(admin::get_all_users))
        .route(
            "/admin/user/{id}",
            put(admin::update_user_role).delete(admin::delete_user),
        )
        .route("/admin/stats", get(admin::get_dashboard_stats))
        // Courses
        .route("/courses", get(course::get_all_courses))
        .route("/createcourse", post(course::create_course))
        .route(
            "/course/{id}",
            get(course::get_course_lectures)
                .post(course::add_lecture)
                .delete(course::delete_course),
        )
        .route("/lecture", delete(course::delete_lecture))
        // Subscriptions
        .route("/subscribe", get(subscription::buy_subscription))
        .route(
            "/paymentverification",
            post(subscription::payment_verification),
        )
        .route("/razorpaykey", get(subscription::get_razorpay_key))
        .route(
            "/subscribe/cancel",
            delete(subscription::cancel_subscription),
        )
        // Contact
        .route("/contact", post(contact::contact))
        .route("/courserequest", post(contact::course_request));

    Router::new().nest(API_PREFIX, api)
}

/// Swagger UI at `/api/docs` backed by the generated OpenAPI document.
pub fn docs() -> SwaggerUi {
    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi())
}
