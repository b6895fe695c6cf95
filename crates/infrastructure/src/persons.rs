//! 联系人缓存的内存实现

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use application::{EventBus, PersonsProvider, StateChange};
use domain::{Person, PersonId};

#[derive(Default)]
struct Directory {
    persons: HashMap<PersonId, Person>,
    me: Option<PersonId>,
}

pub struct InMemoryPersons {
    directory: RwLock<Directory>,
    changes: EventBus<StateChange>,
}

impl InMemoryPersons {
    pub fn new(changes: EventBus<StateChange>) -> Self {
        Self {
            directory: RwLock::new(Directory::default()),
            changes,
        }
    }

    /// 新增或更新联系人
    pub fn upsert(&self, person: Person) {
        self.directory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .persons
            .insert(person.id.clone(), person);
        self.changes.publish(StateChange::Persons);
    }

    /// 设置当前用户本人，同时写入联系人表
    pub fn set_me(&self, person: Person) {
        {
            let mut directory = self.directory.write().unwrap_or_else(PoisonError::into_inner);
            directory.me = Some(person.id.clone());
            directory.persons.insert(person.id.clone(), person);
        }
        self.changes.publish(StateChange::Persons);
    }
}

impl PersonsProvider for InMemoryPersons {
    fn person(&self, id: &PersonId) -> Option<Person> {
        self.directory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .persons
            .get(id)
            .cloned()
    }

    fn me(&self) -> Option<Person> {
        let directory = self.directory.read().unwrap_or_else(PoisonError::into_inner);
        directory
            .me
            .as_ref()
            .and_then(|id| directory.persons.get(id))
            .cloned()
    }
}
