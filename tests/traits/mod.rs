mod transient;
