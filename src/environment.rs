use fnv::FnvHashMap;

use crate::value::Value;

// The single flat scope of a run.  There is no block scoping in this
// version of the language, so no enclosing environment chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    values: FnvHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            values: FnvHashMap::default(),
        }
    }

    // Redeclaring a name simply rebinds it.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    // Returns an error result if the name was never defined; assignment
    // never implicitly declares.
    pub fn assign(&mut self, name: &str, new_value: Value) -> Result<(), ()> {
        match self.values.get_mut(name) {
            None => Err(()),
            Some(value) => {
                *value = new_value;
                Ok(())
            }
        }
    }
}
