mod kinematics_test;
