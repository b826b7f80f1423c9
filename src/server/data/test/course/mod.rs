use crate::server::{
    data::{course::CourseRepository, lecture::LectureRepository},
    model::course::{CourseFilter, CreateLectureParam, Media},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod search;
mod total_views;
