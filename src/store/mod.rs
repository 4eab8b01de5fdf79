//! In-memory entity store.
//!
//! [`Store`] is the single source of truth for all entities and their
//! relationships. It owns the id generator and the three top-level entity
//! maps, and every operation that touches both sides of a relationship
//! (enrollment, unenrollment, teacher reassignment, cascading deletes) goes
//! through one store method so no partial state is ever observable.
//!
//! [`SharedStore`] is the handle the rest of the application holds: an
//! `Arc<RwLock<Store>>` injected through axum state. Reads take the read
//! lock; every mutation takes the single write lock, which serializes
//! compound updates with respect to concurrent requests.

pub mod assoc;
pub mod entity;
pub mod ids;

pub use assoc::{AssocMap, IdSet};
pub use entity::{EntityId, EntityMeta, PersonDetails};
pub use ids::IdGenerator;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::modules::course_classes::model::CourseClass;
use crate::modules::students::model::Student;
use crate::modules::teachers::model::Teacher;

#[derive(Debug)]
pub struct Store {
    ids: IdGenerator,
    students: AssocMap<EntityId, Student>,
    teachers: AssocMap<EntityId, Teacher>,
    course_classes: AssocMap<EntityId, CourseClass>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
            students: AssocMap::new(),
            teachers: AssocMap::new(),
            course_classes: AssocMap::new(),
        }
    }

    // ---- students ----

    pub fn add_student(&mut self, details: PersonDetails) -> EntityId {
        let id = self.ids.generate();
        self.students.add(
            id,
            Student {
                meta: EntityMeta::new(id),
                details,
                enrolled_classes: IdSet::new(),
            },
        );
        id
    }

    pub fn student(&self, id: EntityId) -> Option<&Student> {
        self.students.get(id)
    }

    /// Snapshot of all students in insertion order.
    pub fn students(&self) -> Vec<Student> {
        self.students.to_list()
    }

    pub fn update_student(
        &mut self,
        id: EntityId,
        name: Option<String>,
        birthdate: Option<NaiveDate>,
    ) -> bool {
        let Some(student) = self.students.get_mut(id) else {
            return false;
        };
        if let Some(name) = name {
            student.details.name = name;
        }
        if let Some(birthdate) = birthdate {
            student.details.birthdate = birthdate;
        }
        true
    }

    /// Removes the student and cleans it out of every class roster it was
    /// enrolled in.
    pub fn delete_student(&mut self, id: EntityId) -> bool {
        let Some(student) = self.students.remove(id) else {
            return false;
        };
        for class_id in student.enrolled_classes.keys() {
            if let Some(class) = self.course_classes.get_mut(class_id) {
                class.students.remove(id);
            }
        }
        true
    }

    /// Course classes the student is enrolled in, in enrollment order.
    pub fn classes_of_student(&self, id: EntityId) -> Option<Vec<&CourseClass>> {
        let student = self.students.get(id)?;
        Some(
            student
                .enrolled_classes
                .keys()
                .into_iter()
                .filter_map(|class_id| self.course_classes.get(class_id))
                .collect(),
        )
    }

    // ---- teachers ----

    pub fn add_teacher(&mut self, details: PersonDetails) -> EntityId {
        let id = self.ids.generate();
        self.teachers.add(
            id,
            Teacher {
                meta: EntityMeta::new(id),
                details,
                classes: IdSet::new(),
            },
        );
        id
    }

    pub fn teacher(&self, id: EntityId) -> Option<&Teacher> {
        self.teachers.get(id)
    }

    pub fn teachers(&self) -> Vec<Teacher> {
        self.teachers.to_list()
    }

    pub fn update_teacher(
        &mut self,
        id: EntityId,
        name: Option<String>,
        birthdate: Option<NaiveDate>,
    ) -> bool {
        let Some(teacher) = self.teachers.get_mut(id) else {
            return false;
        };
        if let Some(name) = name {
            teacher.details.name = name;
        }
        if let Some(birthdate) = birthdate {
            teacher.details.birthdate = birthdate;
        }
        true
    }

    /// Removes the teacher. Callers are expected to have rejected teachers
    /// that still teach classes; any class left referencing the id would
    /// dangle.
    pub fn delete_teacher(&mut self, id: EntityId) -> bool {
        self.teachers.remove(id).is_some()
    }

    pub fn classes_of_teacher(&self, id: EntityId) -> Option<Vec<&CourseClass>> {
        let teacher = self.teachers.get(id)?;
        Some(
            teacher
                .classes
                .keys()
                .into_iter()
                .filter_map(|class_id| self.course_classes.get(class_id))
                .collect(),
        )
    }

    /// Distinct students across all of the teacher's classes, in first-seen
    /// enrollment order.
    pub fn students_of_teacher(&self, id: EntityId) -> Option<Vec<&Student>> {
        let teacher = self.teachers.get(id)?;
        let mut seen: Vec<EntityId> = Vec::new();
        let mut students = Vec::new();
        for class_id in teacher.classes.keys() {
            let Some(class) = self.course_classes.get(class_id) else {
                continue;
            };
            for student_id in class.students.keys() {
                if seen.contains(&student_id) {
                    continue;
                }
                seen.push(student_id);
                if let Some(student) = self.students.get(student_id) {
                    students.push(student);
                }
            }
        }
        Some(students)
    }

    // ---- course classes ----

    /// Creates a class taught by `teacher_id` and records it in the
    /// teacher's class map. Returns `None` if the teacher does not exist; a
    /// class is never created without one.
    pub fn add_course_class(&mut self, teacher_id: EntityId) -> Option<EntityId> {
        if !self.teachers.contains(teacher_id) {
            return None;
        }
        let id = self.ids.generate();
        self.course_classes.add(
            id,
            CourseClass {
                meta: EntityMeta::new(id),
                teacher_id,
                students: IdSet::new(),
            },
        );
        if let Some(teacher) = self.teachers.get_mut(teacher_id) {
            teacher.classes.add(id, ());
        }
        Some(id)
    }

    pub fn course_class(&self, id: EntityId) -> Option<&CourseClass> {
        self.course_classes.get(id)
    }

    pub fn course_classes(&self) -> Vec<CourseClass> {
        self.course_classes.to_list()
    }

    /// Moves the class to a new teacher, keeping both teachers' class maps
    /// in sync with the class's own reference.
    pub fn reassign_course_class_teacher(
        &mut self,
        class_id: EntityId,
        new_teacher_id: EntityId,
    ) -> bool {
        if !self.teachers.contains(new_teacher_id) {
            return false;
        }
        let Some(class) = self.course_classes.get_mut(class_id) else {
            return false;
        };
        let old_teacher_id = class.teacher_id;
        class.teacher_id = new_teacher_id;

        if let Some(old_teacher) = self.teachers.get_mut(old_teacher_id) {
            old_teacher.classes.remove(class_id);
        }
        if let Some(new_teacher) = self.teachers.get_mut(new_teacher_id) {
            new_teacher.classes.add(class_id, ());
        }
        true
    }

    /// Removes the class, unenrolling every student and dropping it from
    /// the owning teacher's class map.
    pub fn delete_course_class(&mut self, id: EntityId) -> bool {
        let Some(class) = self.course_classes.remove(id) else {
            return false;
        };
        for student_id in class.students.keys() {
            if let Some(student) = self.students.get_mut(student_id) {
                student.enrolled_classes.remove(id);
            }
        }
        if let Some(teacher) = self.teachers.get_mut(class.teacher_id) {
            teacher.classes.remove(id);
        }
        true
    }

    /// Students enrolled in the class, in enrollment order.
    pub fn students_of_class(&self, id: EntityId) -> Option<Vec<&Student>> {
        let class = self.course_classes.get(id)?;
        Some(
            class
                .students
                .keys()
                .into_iter()
                .filter_map(|student_id| self.students.get(student_id))
                .collect(),
        )
    }

    // ---- enrollment ----

    /// Enrolls the student in the class, updating both relationship maps.
    /// Returns `false` if either side does not exist. Re-enrolling an
    /// already enrolled student is a silent no-op.
    pub fn enroll_student(&mut self, student_id: EntityId, class_id: EntityId) -> bool {
        if !self.students.contains(student_id) || !self.course_classes.contains(class_id) {
            return false;
        }
        if let Some(student) = self.students.get_mut(student_id) {
            student.enrolled_classes.add(class_id, ());
        }
        if let Some(class) = self.course_classes.get_mut(class_id) {
            class.students.add(student_id, ());
        }
        true
    }

    /// Symmetric removal from both relationship maps. A no-op for pairs
    /// that are not enrolled.
    pub fn unenroll_student(&mut self, student_id: EntityId, class_id: EntityId) {
        if let Some(student) = self.students.get_mut(student_id) {
            student.enrolled_classes.remove(class_id);
        }
        if let Some(class) = self.course_classes.get_mut(class_id) {
            class.students.remove(student_id);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle to the store, shared across request handlers.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Store::new())),
        }
    }

    /// Acquires the read lock, recovering from poisoning: a panicked writer
    /// must not wedge every subsequent request.
    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new()
    }
}
