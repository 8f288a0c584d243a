use crate::post::post_form::{Intent, collect_tags, field_value, remove_tag};
use crate::post::post_model::{EditingSubmission, FormState, NewPost, PostList, RejectedSubmission};
use crate::post::post_schema::{PostCandidate, validate};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::generate_post_id;
use actix_web::{HttpResponse, Responder, web};

pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;

    Ok(HttpResponse::Ok().json(PostList { posts }))
}

/// Drive one step of the post editor. Every request carries the full
/// accumulated form; nothing is held on the server between steps.
pub async fn handle_submission(
    post_service: web::Data<PostService>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, CustomError> {
    let fields = form.into_inner();

    let title = field_value(&fields, "title");
    let content = field_value(&fields, "content");
    let intent = field_value(&fields, "intent")
        .ok_or_else(|| CustomError::BadRequestError("missing intent field".to_string()))?;
    let mut tags = collect_tags(&fields)?;

    match Intent::parse(&intent)? {
        Intent::ListInsert => {
            tags.push(String::new());

            Ok(HttpResponse::Ok().json(FormState::Idle {
                submission: Some(EditingSubmission {
                    title: title.unwrap_or_default(),
                    tags,
                    intent,
                }),
            }))
        }
        Intent::ListRemove(index) => {
            remove_tag(&mut tags, index)?;

            Ok(HttpResponse::Ok().json(FormState::Idle {
                submission: Some(EditingSubmission {
                    title: title.unwrap_or_default(),
                    tags,
                    intent,
                }),
            }))
        }
        Intent::Submit => {
            let candidate = PostCandidate {
                title,
                tags,
                content,
            };

            match validate(&candidate) {
                Ok(()) => {
                    let new_post = NewPost {
                        id: generate_post_id(),
                        title: candidate.title.unwrap_or_default(),
                        tags: candidate.tags.join(","),
                        content: candidate.content.unwrap_or_default(),
                    };
                    post_service.create_post(new_post).await?;

                    Ok(HttpResponse::Ok().json(FormState::Success))
                }
                Err(errors) => Ok(HttpResponse::Ok().json(FormState::Error {
                    errors,
                    submission: RejectedSubmission {
                        title: candidate.title.unwrap_or_default(),
                        tags: candidate.tags,
                        content: candidate.content.unwrap_or_default(),
                    },
                })),
            }
        }
    }
}

pub async fn new_post() -> impl Responder {
    HttpResponse::Ok().json(FormState::Idle { submission: None })
}
