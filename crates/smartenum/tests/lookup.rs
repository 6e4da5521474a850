//! Integration tests for plain smart enums: listing, lookup and type isolation.
#[cfg(test)]
mod tests {
    use std::{ptr, sync::LazyLock};

    use smartenum::{
        ErrorKind, Instance, Registry, SmartEnum, error, registry::expect_valid, smart_enum,
    };

    smart_enum! {
        pub struct TestEnum: i32 {
            One = 1,
            Two = 2,
            Three = 3,
        }
    }

    mod first {
        use smartenum::smart_enum;

        smart_enum! {
            pub struct Direction: i32 {
                North = 1,
                East = 2,
                South = 3,
                West = 4,
            }
        }

        pub fn describe(d: &Direction) -> String {
            format!("{} (first)", d.name())
        }
    }

    mod second {
        use smartenum::smart_enum;

        smart_enum! {
            pub struct Direction: i32 {
                Up = 10,
                Right = 20,
                Down = 30,
                Left = 40,
            }
        }

        pub fn describe(d: &Direction) -> String {
            format!("{} (second)", d.name())
        }
    }

    smart_enum! {
        /// Two names share the value 1; the first registrant owns it.
        pub struct Answer: i32 {
            Yes = 1,
            Affirmative = 1,
            No = 0,
        }
    }

    smart_enum! {
        pub struct Code: &'static str {
            Ok = "200",
            NotFound = "404",
        }
    }

    /// Polymorphic behavior through a capability handle.
    trait Bonus: Sync {
        fn bonus(&self) -> u32;
    }

    struct ManagerBonus;
    impl Bonus for ManagerBonus {
        fn bonus(&self) -> u32 {
            1000
        }
    }

    struct AssistantBonus;
    impl Bonus for AssistantBonus {
        fn bonus(&self) -> u32 {
            500
        }
    }

    struct Employee {
        name: &'static str,
        value: i32,
        behavior: &'static dyn Bonus,
    }

    static MANAGER: Employee = Employee {
        name: "Manager",
        value: 1,
        behavior: &ManagerBonus,
    };
    static ASSISTANT: Employee = Employee {
        name: "Assistant",
        value: 2,
        behavior: &AssistantBonus,
    };

    impl Instance for Employee {
        type Value = i32;
        fn name(&self) -> &str {
            self.name
        }
        fn value(&self) -> &i32 {
            &self.value
        }
    }

    impl SmartEnum for Employee {
        fn registry() -> &'static Registry<Self> {
            static REGISTRY: LazyLock<Registry<Employee>> = LazyLock::new(|| {
                expect_valid(Registry::build("Employee", [&MANAGER, &ASSISTANT]))
            });
            &REGISTRY
        }
    }

    #[test]
    fn end_to_end() -> error::Result<()> {
        let names: Vec<_> = TestEnum::list().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["One", "Three", "Two"]);
        assert_eq!(TestEnum::from_name_ignore_case("two")?, &TestEnum::Two);
        let err = TestEnum::from_value(&99).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "no TestEnum with value \"99\" found");
        Ok(())
    }

    #[test]
    fn lookup_by_name_and_value() -> error::Result<()> {
        assert_eq!(TestEnum::list().len(), 3);
        assert!(ptr::eq(TestEnum::from_name("One")?, TestEnum::from_value(&1)?));
        assert_eq!(
            TestEnum::from_name("one").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(TestEnum::from_name_ignore_case("ONE")?.value(), &1);
        assert_eq!(TestEnum::try_from_name("Two"), Some(&TestEnum::Two));
        assert!(TestEnum::try_from_name("InvalidName").is_none());
        assert!(TestEnum::try_from_name("").is_none());
        assert_eq!(TestEnum::from_value(&3)?, &TestEnum::Three);
        assert_eq!(TestEnum::try_from_value(&1), Some(&TestEnum::One));
        assert!(TestEnum::try_from_value(&42).is_none());
        Ok(())
    }

    #[test]
    fn equality_and_display() {
        assert_eq!(TestEnum::One, TestEnum::One);
        assert_ne!(TestEnum::One, TestEnum::Two);
        assert_eq!(TestEnum::Two.to_string(), "Two");
        // Equality ignores names.
        assert_eq!(Answer::Yes, Answer::Affirmative);
        assert!(Answer::Yes.same_value(&Answer::Affirmative));
    }

    #[test]
    fn duplicate_values_first_wins() -> error::Result<()> {
        assert_eq!(Answer::from_value(&1)?.name(), "Yes");
        assert_eq!(Answer::from_name("Affirmative")?.name(), "Affirmative");
        assert_eq!(Answer::list().len(), 3);
        Ok(())
    }

    #[test]
    fn non_integer_values() -> error::Result<()> {
        assert_eq!(Code::from_value(&"404")?.name(), "NotFound");
        assert_eq!(Code::from_name("Ok")?.value(), &"200");
        Ok(())
    }

    #[test]
    fn same_name_types_are_isolated() -> error::Result<()> {
        assert_eq!(first::Direction::list().len(), 4);
        assert_eq!(second::Direction::list().len(), 4);
        assert_eq!(first::Direction::North.value(), &1);
        assert_eq!(second::Direction::Up.value(), &10);

        assert_eq!(first::Direction::from_name("East")?, &first::Direction::East);
        assert_eq!(
            second::Direction::from_name("Right")?,
            &second::Direction::Right
        );
        assert_eq!(
            first::describe(&first::Direction::East),
            "East (first)"
        );
        assert_eq!(
            second::describe(&second::Direction::Right),
            "Right (second)"
        );

        assert_eq!(first::Direction::from_value(&3)?, &first::Direction::South);
        assert_eq!(second::Direction::from_value(&30)?, &second::Direction::Down);
        assert!(first::Direction::try_from_value(&10).is_none());
        assert!(second::Direction::try_from_value(&1).is_none());
        assert!(first::Direction::try_from_name("Up").is_none());
        Ok(())
    }

    #[test]
    fn polymorphic_behavior() -> error::Result<()> {
        assert_eq!(Employee::from_name("Manager")?.behavior.bonus(), 1000);
        assert_eq!(Employee::from_value(&2)?.behavior.bonus(), 500);
        let total: u32 = Employee::list().iter().map(|e| e.behavior.bonus()).sum();
        assert_eq!(total, 1500);
        assert_eq!(Employee::list()[0].name(), "Assistant");
        Ok(())
    }
}
