use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, lecture::LectureRepository, playlist::PlaylistRepository},
    error::AppError,
    events::feed::{ChangeFeed, CollectionChange},
    media::{MediaFile, MediaHost, MediaKind},
    model::course::{Course, CourseFilter, CreateCourseParam, CreateLectureParam, Lecture, Media},
};

/// Course catalogue and lecture management.
pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
    media: &'a dyn MediaHost,
    feed: &'a ChangeFeed,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a dyn MediaHost, feed: &'a ChangeFeed) -> Self {
        Self { db, media, feed }
    }

    /// Lists courses matching the filter, newest first.
    pub async fn list(&self, filter: CourseFilter) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).search(filter).await?)
    }

    /// Uploads the poster then inserts the course.
    pub async fn create(
        &self,
        param: CreateCourseParam,
        poster: MediaFile,
    ) -> Result<Course, AppError> {
        let uploaded = self.media.upload(poster, MediaKind::Image).await?;

        let course = CourseRepository::new(self.db)
            .create(
                param,
                Media {
                    public_id: uploaded.public_id,
                    url: uploaded.secure_url,
                },
            )
            .await?;
        self.feed.publish(CollectionChange::Course);

        tracing::info!("Created course {}", course.id);

        Ok(course)
    }

    /// Gets the lectures of a course and counts the visit.
    ///
    /// # Returns
    /// - `Ok(Vec<Lecture>)` - Lectures in insertion order
    /// - `Err(AppError::NotFound)` - Unknown course
    pub async fn get_lectures(&self, course_id: i32) -> Result<Vec<Lecture>, AppError> {
        let course = self.find_existing(course_id).await?;

        CourseRepository::new(self.db)
            .increment_views(course.id)
            .await?;
        self.feed.publish(CollectionChange::Course);

        Ok(LectureRepository::new(self.db)
            .get_by_course(course.id)
            .await?)
    }

    /// Uploads a lecture video and attaches it to the course.
    pub async fn add_lecture(
        &self,
        course_id: i32,
        param: CreateLectureParam,
        video: MediaFile,
    ) -> Result<Lecture, AppError> {
        let course = self.find_existing(course_id).await?;

        let uploaded = self.media.upload(video, MediaKind::Video).await?;

        let lecture_repo = LectureRepository::new(self.db);
        let lecture = lecture_repo
            .create(
                course.id,
                param,
                Media {
                    public_id: uploaded.public_id,
                    url: uploaded.secure_url,
                },
            )
            .await?;

        self.sync_video_count(course.id).await?;
        self.feed.publish(CollectionChange::Course);

        Ok(lecture)
    }

    /// Deletes a course together with its media, lectures and playlist entries.
    pub async fn delete_course(&self, course_id: i32) -> Result<(), AppError> {
        let course = self.find_existing(course_id).await?;

        self.media
            .destroy(&course.poster.public_id, MediaKind::Image)
            .await?;

        let lecture_repo = LectureRepository::new(self.db);
        for lecture in lecture_repo.get_by_course(course.id).await? {
            self.media
                .destroy(&lecture.video.public_id, MediaKind::Video)
                .await?;
        }

        lecture_repo.delete_by_course(course.id).await?;
        PlaylistRepository::new(self.db)
            .remove_course(course.id)
            .await?;
        CourseRepository::new(self.db).delete(course.id).await?;
        self.feed.publish(CollectionChange::Course);

        tracing::info!("Deleted course {}", course.id);

        Ok(())
    }

    /// Deletes one lecture and its video.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown course, or the lecture is not part of it
    pub async fn delete_lecture(&self, course_id: i32, lecture_id: i32) -> Result<(), AppError> {
        let course = self.find_existing(course_id).await?;

        let lecture_repo = LectureRepository::new(self.db);
        let Some(lecture) = lecture_repo.find(course.id, lecture_id).await? else {
            return Err(AppError::NotFound("Lecture not found".to_string()));
        };

        self.media
            .destroy(&lecture.video.public_id, MediaKind::Video)
            .await?;
        lecture_repo.delete(lecture.id).await?;

        self.sync_video_count(course.id).await?;
        self.feed.publish(CollectionChange::Course);

        Ok(())
    }

    async fn sync_video_count(&self, course_id: i32) -> Result<(), AppError> {
        let count = LectureRepository::new(self.db)
            .count_by_course(course_id)
            .await?;

        CourseRepository::new(self.db)
            .set_num_of_videos(course_id, count as i32)
            .await?;

        Ok(())
    }

    async fn find_existing(&self, course_id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}
