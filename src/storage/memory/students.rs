//! 学生存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::CreateStudentRequest};

impl MemoryStorage {
    /// 创建学生
    pub(crate) async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let id = self.next_student_id();
        let student = Student {
            id,
            name: req.name,
            turma: req.turma,
        };
        self.students.insert(id, student.clone());
        Ok(student)
    }

    /// 通过 ID 获取学生
    pub(crate) async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        Ok(self.students.get(&id).map(|s| s.clone()))
    }

    /// 按班级列出学生
    pub(crate) async fn list_students_by_turma_impl(&self, turma: &str) -> Result<Vec<Student>> {
        let mut students: Vec<Student> = self
            .students
            .iter()
            .filter(|e| e.value().turma == turma)
            .map(|e| e.value().clone())
            .collect();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::models::students::requests::CreateStudentRequest;

    fn student(name: &str, turma: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            turma: turma.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_students_by_turma_filters_and_sorts() {
        let storage = MemoryStorage::new();
        storage.create_student_impl(student("Ana", "3A")).await.unwrap();
        storage.create_student_impl(student("Bruno", "3B")).await.unwrap();
        storage.create_student_impl(student("Carla", "3A")).await.unwrap();

        let turma_a = storage.list_students_by_turma_impl("3A").await.unwrap();
        assert_eq!(turma_a.len(), 2);
        assert_eq!(turma_a[0].name, "Ana");
        assert_eq!(turma_a[1].name, "Carla");
        assert!(turma_a[0].id < turma_a[1].id);

        let turma_c = storage.list_students_by_turma_impl("3C").await.unwrap();
        assert!(turma_c.is_empty());
    }
}
