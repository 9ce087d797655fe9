//! 路径参数安全提取器
//!
//! 路径里的 ID 解析失败时直接返回 400 的统一错误响应，
//! 处理函数拿到的永远是合法的 i64。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, err, ok};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    match req.match_info().get($param).map(str::parse::<i64>) {
                        Some(Ok(id)) if id > 0 => ok($name(id)),
                        _ => {
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::BadRequest,
                                    concat!("Invalid ", $param, " in path"),
                                ),
                            );
                            err(actix_web::error::InternalError::from_response(
                                concat!("Invalid ", $param),
                                response,
                            )
                            .into())
                        }
                    }
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeQuizIdI64("quiz_id"),
    SafeQuestionIdI64("question_id"),
    SafeStudentIdI64("student_id"),
    SafeInstructorIdI64("instructor_id"),
}
